//! Static HTML report renderer
//!
//! Produces one self-contained document per page model. Every page shares
//! the same header and navigation bar; the navigation entry whose [`PageId`]
//! equals the page's own id is marked active.

use pdetrack_core::{
    CategoryPage, ItemView, OverviewPage, PageId, PageModel, RenderError, Renderer, Report, Span,
    Status,
};

use crate::config::ReportConfig;
use crate::html_escape;

/// One rendered output document
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedPage {
    pub id: PageId,
    pub file_name: String,
    pub html: String,
}

// ============================================================================
// Navigation
// ============================================================================

/// One link of the navigation bar
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub page: PageId,
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

/// Navigation bar of a given page
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    entries: Vec<NavEntry>,
}

impl Navigation {
    /// Entries for all pages in fixed order, with `current` marked active
    pub fn for_page(current: PageId) -> Self {
        let entries = PageId::ALL
            .into_iter()
            .map(|page| NavEntry {
                page,
                label: page.nav_label(),
                href: page.file_name(),
                active: page == current,
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn active(&self) -> Option<&NavEntry> {
        self.entries.iter().find(|e| e.active)
    }

    fn to_html(&self) -> String {
        let mut html = String::from("    <nav class=\"report-nav\">\n");
        for entry in &self.entries {
            let marker = if entry.active {
                r#" class="active" aria-current="page""#
            } else {
                ""
            };
            html.push_str(&format!(
                "        <a href=\"{}\"{}>{}</a>\n",
                entry.href,
                marker,
                html_escape(entry.label)
            ));
        }
        html.push_str("    </nav>");
        html
    }
}

// ============================================================================
// Renderer
// ============================================================================

/// HTML report renderer
#[derive(Clone, Debug)]
pub struct HtmlReportRenderer {
    config: ReportConfig,
}

impl Default for HtmlReportRenderer {
    fn default() -> Self {
        Self::new(ReportConfig::default())
    }
}

impl HtmlReportRenderer {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Render a single page model
    pub fn render_page(&self, page: &PageModel) -> RenderedPage {
        let id = page.id();
        let body = match page {
            PageModel::Overview(overview) => self.render_overview(overview),
            PageModel::Category(category) => self.render_category(category),
        };
        RenderedPage {
            id,
            file_name: id.file_name(),
            html: self.generate_html(id, &body),
        }
    }

    /// Generate the complete HTML document
    fn generate_html(&self, id: PageId, body: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="fr">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{page_title} - {title}</title>
    <style>
{css}
    </style>
</head>
<body data-page="{slug}">
    <header class="report-header">
        <div>
            <h1>{title}</h1>
            <div class="meta">Dernière mise à jour : {date}</div>
        </div>
        <img src="{logo}" alt="Logo">
    </header>
{nav}
    <main>
{body}
    </main>
</body>
</html>
"#,
            page_title = html_escape(id.nav_label()),
            title = html_escape(&self.config.title),
            css = self.generate_css(),
            slug = id.slug(),
            date = self.config.generated_date.format("%Y-%m-%d"),
            logo = html_escape(&self.config.logo_url),
            nav = Navigation::for_page(id).to_html(),
            body = body,
        )
    }

    fn render_overview(&self, page: &OverviewPage) -> String {
        let mut html = String::from("        <hr>\n");
        html.push_str(&format!("        <h2>{}</h2>\n", html_escape(page.heading)));
        for paragraph in page.paragraphs {
            html.push_str("        <p>");
            for span in *paragraph {
                html.push_str(&render_span(span));
            }
            html.push_str("</p>\n");
        }
        html.push_str(&format!(
            r#"        <hr>
        <div class="card mission">
            <h2>{}</h2>
            <p><em>{}</em></p>
        </div>"#,
            html_escape(page.mission_title),
            html_escape(page.mission_statement),
        ));
        html
    }

    fn render_category(&self, page: &CategoryPage) -> String {
        let aggregate = &page.aggregate;
        let mut html = format!(
            r#"        <h2 class="orientation-title">{title}</h2>
        <hr>
        <div class="section-header">{icon} Moyenne d'atteinte des objectifs pour cette orientation : {mean} %</div>
        <p class="status {class}">{message}</p>
        <hr>
"#,
            title = html_escape(page.title()),
            icon = page.icon(),
            mean = aggregate.mean_pct,
            class = status_class(aggregate.status),
            message = aggregate.status.message(),
        );

        if page.items.is_empty() {
            html.push_str("        <p class=\"empty\">Aucune donnée trouvée pour cette orientation.</p>");
            return html;
        }

        html.push_str("        <h4><u>Progression par objectif :</u></h4>");
        for item in &page.items {
            html.push('\n');
            html.push_str(&render_item(item));
        }
        html
    }

    /// Generate CSS styles from the color theme
    fn generate_css(&self) -> String {
        let theme = &self.config.color_theme;
        format!(
            r#"        :root {{
            --primary-color: {primary};
            --accent-color: {accent};
            --bg-color: {bg};
            --text-color: {text};
            --muted-color: {muted};
            --track-color: {track};
        }}
        body {{
            font-family: system-ui, -apple-system, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            background: var(--bg-color);
            color: var(--text-color);
            margin: 18px;
        }}
        .report-header {{ display: flex; align-items: center; justify-content: space-between; }}
        .report-header h1 {{ margin: 0; }}
        .report-header img {{ height: 64px; }}
        .report-nav {{ margin-top: 12px; margin-bottom: 20px; }}
        .report-nav a {{ margin-right: 12px; color: var(--primary-color); text-decoration: none; font-weight: 600; }}
        .report-nav a.active {{ font-weight: 700; border-bottom: 2px solid var(--primary-color); }}
        .orientation-title {{ color: var(--primary-color); font-size: 18px; }}
        .section-header {{ color: var(--accent-color); font-size: 20px; font-weight: bold; margin-top: 12px; }}
        .card {{ border: 1px solid #e6eef0; border-radius: 6px; padding: 12px; background: var(--bg-color); margin-bottom: 18px; }}
        .mission h2 {{ text-align: center; margin-top: 0; }}
        .mission p {{ text-align: center; color: var(--muted-color); }}
        .objective-head {{ display: flex; justify-content: space-between; align-items: flex-end; margin-bottom: 6px; font-weight: 600; }}
        .objective-pct {{ color: var(--muted-color); }}
        .objective-meta {{ display: flex; justify-content: space-between; align-items: flex-end; margin-bottom: 8px; }}
        .progress-bg {{ width: 100%; background: var(--track-color); height: 12px; border-radius: 4px; overflow: hidden; }}
        .progress {{ height: 100%; background: var(--accent-color); border-radius: 4px; }}
        .meta {{ color: var(--muted-color); font-size: 0.95rem; }}
        .empty {{ color: var(--muted-color); font-style: italic; }}"#,
            primary = theme.primary,
            accent = theme.accent,
            bg = theme.background,
            text = theme.text,
            muted = theme.muted,
            track = theme.track,
        )
    }
}

impl Renderer for HtmlReportRenderer {
    type Output = Vec<RenderedPage>;

    fn render(&self, report: &Report) -> Result<Vec<RenderedPage>, RenderError> {
        if report.pages().is_empty() {
            return Err(RenderError::InvalidData("No pages to render".into()));
        }
        Ok(report.pages().iter().map(|page| self.render_page(page)).collect())
    }
}

fn render_item(item: &ItemView) -> String {
    let record = &item.record;
    format!(
        r#"        <div class="card objective">
            <div class="objective-head">
                <div class="objective-label">{label}</div>
                <div class="objective-pct">{pct}%</div>
            </div>
            <div class="meta objective-meta">
                <div>Valeur de référence : {reference}</div>
                <div>Cible : {target}</div>
                <div>Valeur au dernier suivi : {result}</div>
                <div>Suivi le : {date}</div>
                <div>Échéance : {deadline}</div>
            </div>
            <div class="progress-bg"><div class="progress" style="width:{pct}%;"></div></div>
        </div>"#,
        label = html_escape(&record.label),
        pct = item.display_pct,
        reference = html_escape(&record.reference_value),
        target = html_escape(&record.target_value),
        result = html_escape(&record.result_value),
        date = html_escape(&record.result_date),
        deadline = html_escape(&record.deadline),
    )
}

fn render_span(span: &Span) -> String {
    match span {
        Span::Text(text) => html_escape(text),
        Span::Strong(text) => format!("<strong>{}</strong>", html_escape(text)),
        Span::Link { text, href } => {
            format!("<a href=\"{}\">{}</a>", html_escape(href), html_escape(text))
        }
    }
}

fn status_class(status: Status) -> &'static str {
    match status {
        Status::OnTrack => "status-on-track",
        Status::NeedsEffort => "status-needs-effort",
        Status::HighPriority => "status-high-priority",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pdetrack_core::{build_report, Category, SourceRow};

    fn config() -> ReportConfig {
        ReportConfig::new(NaiveDate::from_ymd_opt(2026, 1, 13).unwrap())
    }

    fn sample_report() -> Report {
        let water = Category::WaterQuality.source_label();
        build_report(&[
            SourceRow::new(3)
                .category(water)
                .label("Réduire <les> surverses & rejets")
                .reference(12.0)
                .target("0")
                .result("8")
                .result_date("2025-10-01")
                .deadline("2030")
                .achievement("66.7%"),
            SourceRow::new(4).category(water).label("Suivre").achievement("90%"),
        ])
    }

    #[test]
    fn navigation_marks_only_current_page() {
        for id in PageId::ALL {
            let nav = Navigation::for_page(id);
            assert_eq!(nav.entries().len(), 6);
            assert_eq!(nav.entries().iter().filter(|e| e.active).count(), 1);
            assert_eq!(nav.active().map(|e| e.page), Some(id));
        }
    }

    #[test]
    fn navigation_order_is_fixed() {
        let nav = Navigation::for_page(PageId::Category(Category::Wetlands));
        let hrefs: Vec<&str> = nav.entries().iter().map(|e| e.href.as_str()).collect();
        assert_eq!(
            hrefs,
            vec![
                "index.html",
                "orientation-1.html",
                "orientation-2.html",
                "orientation-3.html",
                "orientation-4.html",
                "orientation-5.html"
            ]
        );
    }

    #[test]
    fn page_document_structure() {
        let renderer = HtmlReportRenderer::new(config());
        let pages = renderer.render(&sample_report()).unwrap();
        let html = &pages[1].html;

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"fr\">"));
        assert!(html.contains("</html>"));
        assert!(html.contains("<body data-page=\"orientation-1\">"));
        assert!(html.contains("Dernière mise à jour : 2026-01-13"));
        assert!(html.contains("<title>1. Qualité de l'eau - OBVFSJ - Suivi des objectifs du PDE 2024-2034</title>"));
    }

    #[test]
    fn category_banner_and_items() {
        let renderer = HtmlReportRenderer::new(config());
        let pages = renderer.render(&sample_report()).unwrap();
        let html = &pages[1].html;

        assert!(html.contains("💧🌊 Moyenne d'atteinte des objectifs pour cette orientation : 78 %"));
        assert!(html.contains("status-on-track"));
        assert!(html.contains(Status::OnTrack.message()));
        assert!(html.contains("<div class=\"objective-pct\">66%</div>"));
        assert!(html.contains("style=\"width:66%;\""));
        assert!(html.contains("style=\"width:90%;\""));
        assert!(html.contains("Valeur de référence : 12"));
        assert!(html.contains("Échéance : 2030"));
        assert_eq!(html.matches("class=\"card objective\"").count(), 2);
    }

    #[test]
    fn free_text_is_escaped() {
        let renderer = HtmlReportRenderer::new(config().title("A & B <test>"));
        let pages = renderer.render(&sample_report()).unwrap();
        let html = &pages[1].html;

        assert!(html.contains("Réduire &lt;les&gt; surverses &amp; rejets"));
        assert!(!html.contains("<les>"));
        assert!(html.contains("<h1>A &amp; B &lt;test&gt;</h1>"));
    }

    #[test]
    fn empty_category_states_missing_data() {
        let renderer = HtmlReportRenderer::new(config());
        let pages = renderer.render(&sample_report()).unwrap();
        let html = &pages[2].html;

        assert!(html.contains("pour cette orientation : 0 %"));
        assert!(html.contains("status-high-priority"));
        assert!(html.contains("Aucune donnée trouvée pour cette orientation."));
        assert!(!html.contains("class=\"card objective\""));
    }

    #[test]
    fn overview_has_static_content() {
        let renderer = HtmlReportRenderer::new(config());
        let pages = renderer.render(&sample_report()).unwrap();
        let html = &pages[0].html;

        assert_eq!(pages[0].file_name, "index.html");
        assert!(html.contains("<strong>47 objectifs</strong>"));
        assert!(html.contains("Mission de l'OBVFSJ"));
        assert!(html.contains(
            "<a href=\"https://obvfleuvestjean.com/un-bassin-versant-transfrontalier/\">"
        ));
        assert!(!html.contains("Moyenne d'atteinte"));
    }

    #[test]
    fn theme_colors_reach_stylesheet() {
        let theme = crate::config::ColorTheme {
            accent: "#ff00aa".into(),
            ..Default::default()
        };
        let renderer = HtmlReportRenderer::new(config().color_theme(theme));
        let page = renderer.render_page(&sample_report().pages()[0]);
        assert!(page.html.contains("--accent-color: #ff00aa;"));
    }
}
