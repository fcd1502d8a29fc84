//! Fixed geometric composition that previews a palette as SVG.

use chroma_core::{ColorInfo, ColorRole, Palette};

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 450;

/// Fill used for a role the palette does not contain.
pub const MISSING_ROLE_FILL: &str = "#ccc";

const VERTICAL_GRID_LINES: u32 = 10;
const HORIZONTAL_GRID_LINES: u32 = 6;

/// One fill per role, resolved once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseColors {
    pub background: String,
    pub text: String,
    pub primary: String,
    pub secondary: String,
    pub accent1: String,
    pub accent2: String,
}

impl ShowcaseColors {
    pub fn from_colors(colors: &[ColorInfo]) -> Self {
        let fill = |role: ColorRole| {
            colors
                .iter()
                .find(|c| c.role == role)
                .map(|c| c.hex.trim())
                .filter(|hex| !hex.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| MISSING_ROLE_FILL.to_string())
        };
        Self {
            background: fill(ColorRole::Background),
            text: fill(ColorRole::Text),
            primary: fill(ColorRole::Primary),
            secondary: fill(ColorRole::Secondary),
            accent1: fill(ColorRole::Accent1),
            accent2: fill(ColorRole::Accent2),
        }
    }
}

pub fn render_showcase(colors: &[ColorInfo]) -> String {
    render(&ShowcaseColors::from_colors(colors))
}

pub fn render_palette_showcase(palette: &Palette) -> String {
    render_showcase(palette.colors())
}

fn render(c: &ShowcaseColors) -> String {
    let bg = escape_attr(&c.background);
    let text = escape_attr(&c.text);
    let primary = escape_attr(&c.primary);
    let secondary = escape_attr(&c.secondary);
    let accent1 = escape_attr(&c.accent1);
    let accent2 = escape_attr(&c.accent2);

    let mut out = Vec::with_capacity(32);
    out.push(format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {WIDTH} {HEIGHT}" width="{WIDTH}" height="{HEIGHT}">"#
    ));
    out.push(format!(
        r#"  <rect x="0" y="0" width="{WIDTH}" height="{HEIGHT}" fill="{bg}"/>"#
    ));
    out.push(format!(
        r#"  <circle cx="700" cy="50" r="200" fill="{secondary}" fill-opacity="0.2"/>"#
    ));

    out.push(format!(
        r#"  <rect x="100" y="100" width="150" height="150" rx="20" fill="{primary}"/>"#
    ));
    out.push(format!(r#"  <circle cx="400" cy="225" r="80" fill="{accent1}"/>"#));
    out.push(format!(
        r#"  <polygon points="550,100 700,100 625,250" fill="{accent2}"/>"#
    ));

    out.push(format!(
        r#"  <rect x="100" y="300" width="300" height="40" rx="10" fill="{secondary}"/>"#
    ));
    out.push(format!(
        r#"  <rect x="100" y="360" width="200" height="20" rx="10" fill="{text}" fill-opacity="0.3"/>"#
    ));

    out.push(format!(r#"  <circle cx="650" cy="350" r="40" fill="{accent1}"/>"#));
    out.push(format!(r#"  <circle cx="720" cy="350" r="20" fill="{accent2}"/>"#));

    out.push(format!(
        r#"  <g stroke="{text}" stroke-opacity="0.05" stroke-width="1">"#
    ));
    for i in 0..VERTICAL_GRID_LINES {
        let x = i * 80;
        out.push(format!(
            r#"    <line x1="{x}" y1="0" x2="{x}" y2="{HEIGHT}"/>"#
        ));
    }
    for i in 0..HORIZONTAL_GRID_LINES {
        let y = i * 75;
        out.push(format!(
            r#"    <line x1="0" y1="{y}" x2="{WIDTH}" y2="{y}"/>"#
        ));
    }
    out.push("  </g>".to_string());

    out.push(format!(
        r#"  <text x="400" y="235" font-family="Space Grotesk" font-size="32" font-weight="bold" fill="{bg}" text-anchor="middle">Visual Harmony</text>"#
    ));
    out.push(format!(
        r#"  <text x="100" y="70" font-family="Inter" font-size="14" fill="{text}" fill-opacity="0.6">PALETTE PREVIEW V.1.0</text>"#
    ));
    out.push("</svg>".to_string());

    let mut svg = out.join("\n");
    svg.push('\n');
    svg
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_palette() -> Vec<ColorInfo> {
        vec![
            ColorInfo::new("#f8fafc", "Paper", ColorRole::Background, ""),
            ColorInfo::new("#0f172a", "Ink", ColorRole::Text, ""),
            ColorInfo::new("#2563eb", "Cobalt", ColorRole::Primary, ""),
            ColorInfo::new("#64748b", "Slate", ColorRole::Secondary, ""),
            ColorInfo::new("#f97316", "Ember", ColorRole::Accent1, ""),
            ColorInfo::new("#14b8a6", "Lagoon", ColorRole::Accent2, ""),
        ]
    }

    #[test]
    fn test_layout_and_fills() {
        let svg = render_showcase(&full_palette());

        assert!(svg.starts_with("<svg "));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(r##"viewBox="0 0 800 450""##));
        assert!(svg.contains(r##"<rect x="0" y="0" width="800" height="450" fill="#f8fafc"/>"##));
        assert!(svg.contains(r##"r="200" fill="#64748b" fill-opacity="0.2""##));
        assert!(svg.contains(r##"rx="20" fill="#2563eb""##));
        assert!(svg.contains(r##"<circle cx="400" cy="225" r="80" fill="#f97316"/>"##));
        assert!(svg.contains(r##"<polygon points="550,100 700,100 625,250" fill="#14b8a6"/>"##));
        assert!(svg.contains(r##"fill="#0f172a" fill-opacity="0.3""##));
        assert!(svg.contains(r##"<g stroke="#0f172a" stroke-opacity="0.05""##));
    }

    #[test]
    fn test_grid_line_counts() {
        let svg = render_showcase(&full_palette());
        assert_eq!(svg.matches("<line ").count(), 16);
        assert!(svg.contains(r##"<line x1="720" y1="0" x2="720" y2="450"/>"##));
        assert!(svg.contains(r##"<line x1="0" y1="375" x2="800" y2="375"/>"##));
        assert!(!svg.contains(r##"x1="800" y1="0""##));
    }

    #[test]
    fn test_text_overlays() {
        let svg = render_showcase(&full_palette());
        assert!(svg.contains(r##"fill="#f8fafc" text-anchor="middle">Visual Harmony</text>"##));
        assert!(svg.contains(r##"fill="#0f172a" fill-opacity="0.6">PALETTE PREVIEW V.1.0</text>"##));
    }

    #[test]
    fn test_missing_roles_fall_back() {
        let colors = vec![ColorInfo::new("#000000", "Void", ColorRole::Background, "")];
        let resolved = ShowcaseColors::from_colors(&colors);
        assert_eq!(resolved.background, "#000000");
        assert_eq!(resolved.primary, MISSING_ROLE_FILL);

        let svg = render_showcase(&[]);
        assert!(svg.contains(r##"fill="#ccc""##));
        assert!(!svg.contains(r##"fill="#000000""##));
    }

    #[test]
    fn test_blank_hex_falls_back() {
        let colors = vec![
            ColorInfo::new("", "Nothing", ColorRole::Primary, ""),
            ColorInfo::new("  ", "Spaces", ColorRole::Accent2, ""),
        ];
        let resolved = ShowcaseColors::from_colors(&colors);
        assert_eq!(resolved.primary, MISSING_ROLE_FILL);
        assert_eq!(resolved.accent2, MISSING_ROLE_FILL);
        assert!(!render_showcase(&colors).contains(r#"fill="""#));
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let colors = vec![ColorInfo::new(r##""/><script>"##, "Evil", ColorRole::Primary, "")];
        let svg = render_showcase(&colors);
        assert!(!svg.contains("<script>"));
        assert!(svg.contains("&quot;/&gt;&lt;script&gt;"));
    }
}
