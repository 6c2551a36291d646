//! Publishing notes written next to the generated pages.

use crate::config::ReportConfig;

/// Markdown README explaining how to publish and regenerate the pages
pub fn publish_readme(config: &ReportConfig) -> String {
    format!(
        r#"# {title}

Static export generated on {date}.

The files in this folder are self-contained HTML pages, suitable for publishing
with GitHub Pages or any static file host (serve the whole folder, `index.html`
is the entry point).

To embed the report on another site, use an iframe:

```html
<iframe src="https://<your-host>/<path>/index.html" width="100%" height="900" frameborder="0"></iframe>
```

Regenerate these files after updating the follow-up workbook:

```sh
pdetrack build <workbook.xlsx> --output <this-folder>
```
"#,
        title = config.title,
        date = config.generated_date.format("%Y-%m-%d"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn readme_mentions_title_and_date() {
        let config = ReportConfig::new(NaiveDate::from_ymd_opt(2026, 1, 13).unwrap());
        let readme = publish_readme(&config);
        assert!(readme.starts_with("# OBVFSJ - Suivi des objectifs"));
        assert!(readme.contains("generated on 2026-01-13"));
        assert!(readme.contains("<iframe"));
        assert!(readme.contains("pdetrack build"));
    }
}
