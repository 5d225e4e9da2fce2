//! SVG renderer: turns a timeline's `RenderCommand` list into a standalone
//! SVG document.

use std::fmt::Write;

use dayplan_protocol::{Rect, RenderCommand, TextAlign, ThemeToken};

const CORNER_RADIUS: f64 = 7.0;
const TITLE_FONT_PX: f64 = 13.0;
/// Rough average glyph width at `TITLE_FONT_PX`, used for truncation.
const CHAR_WIDTH_PX: f64 = 7.0;

/// Render a list of commands as an SVG document string.
///
/// `width` and `height` define the viewBox. `dark` selects the palette.
/// Clip and group commands are ignored.
pub fn render_svg(commands: &[RenderCommand], width: f64, height: f64, dark: bool) -> String {
    let mut svg = String::with_capacity(commands.len() * 160);
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}" style="font-family:system-ui,-apple-system,sans-serif;font-size:{TITLE_FONT_PX}px">"#,
    );
    let _ = write!(
        svg,
        r#"<rect width="{width}" height="{height}" fill="{}"/>"#,
        resolve_color(ThemeToken::Background, dark),
    );

    for cmd in commands {
        match cmd {
            RenderCommand::DrawRect {
                rect,
                color,
                border_color,
                label,
                task_index,
            } => {
                let fill = resolve_color(*color, dark);
                let radius = if task_index.is_some() { CORNER_RADIUS } else { 0.0 };
                let _ = write!(
                    svg,
                    r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{radius}" fill="{fill}""#,
                    rect.x, rect.y, rect.w, rect.h,
                );
                if let Some(border) = border_color {
                    let _ = write!(svg, r#" stroke="{}""#, resolve_color(*border, dark));
                }
                svg.push('>');
                if let Some(label) = label {
                    let _ = write!(svg, "<title>{}</title>", escape_xml(label));
                }
                svg.push_str("</rect>");

                if let Some(label) = label {
                    write_box_title(&mut svg, rect, label, dark);
                }
            }
            RenderCommand::DrawLine {
                from,
                to,
                color,
                width: line_width,
            } => {
                let stroke = resolve_color(*color, dark);
                let _ = write!(
                    svg,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{stroke}" stroke-width="{line_width}"/>"#,
                    from.x, from.y, to.x, to.y,
                );
            }
            RenderCommand::DrawText {
                text,
                position,
                color,
                font_size,
                align,
            } => {
                let fill = resolve_color(*color, dark);
                let anchor = match align {
                    TextAlign::Left => "start",
                    TextAlign::Right => "end",
                };
                let _ = write!(
                    svg,
                    r#"<text x="{}" y="{}" fill="{fill}" font-size="{font_size}" text-anchor="{anchor}">{}</text>"#,
                    position.x,
                    position.y,
                    escape_xml(text),
                );
            }
            RenderCommand::SetClip { .. }
            | RenderCommand::ClearClip
            | RenderCommand::BeginGroup { .. }
            | RenderCommand::EndGroup => {}
        }
    }

    svg.push_str("</svg>");
    svg
}

/// Title text in the top-left corner of a task box, cut with an ellipsis
/// when the box is too narrow.
fn write_box_title(svg: &mut String, rect: &Rect, label: &str, dark: bool) {
    let max_chars = ((rect.w - 12.0) / CHAR_WIDTH_PX) as usize;
    if max_chars < 2 {
        return;
    }
    let text = if label.chars().count() > max_chars {
        let truncated: String = label.chars().take(max_chars - 1).collect();
        format!("{truncated}…")
    } else {
        label.to_string()
    };
    let _ = write!(
        svg,
        r#"<text x="{}" y="{}" fill="{}" font-weight="500" style="pointer-events:none">{}</text>"#,
        rect.x + 6.0,
        rect.y + TITLE_FONT_PX + 6.0,
        resolve_color(ThemeToken::TextPrimary, dark),
        escape_xml(&text),
    );
}

fn resolve_color(token: ThemeToken, dark: bool) -> &'static str {
    if dark {
        match token {
            ThemeToken::TaskPending => "#b7791f",
            ThemeToken::TaskLate => "#7f1d1d",
            ThemeToken::TaskDone => "#1e3a5f",
            ThemeToken::TaskBorder | ThemeToken::Border => "#303030",
            ThemeToken::TaskLateBorder | ThemeToken::NowLine => "#f87171",
            ThemeToken::TimelineBackground | ThemeToken::Background => "#181818",
            ThemeToken::HourColumnBackground => "#202024",
            ThemeToken::GridLine => "#2c2c30",
            ThemeToken::AxisLine => "#818cf8",
            ThemeToken::TextPrimary => "#ececec",
            ThemeToken::TextDone => "#9e9e9e",
        }
    } else {
        match token {
            ThemeToken::TaskPending => "#fbbf24",
            ThemeToken::TaskLate => "#fecaca",
            ThemeToken::TaskDone => "#e0f2fe",
            ThemeToken::TaskBorder | ThemeToken::Border => "#e0e7ef",
            ThemeToken::TaskLateBorder => "#ef4444",
            ThemeToken::NowLine => "#f87171",
            ThemeToken::TimelineBackground => "#ffffff",
            ThemeToken::Background => "#f9fafb",
            ThemeToken::HourColumnBackground => "#f3f4f6",
            ThemeToken::GridLine => "#e5e7eb",
            ThemeToken::AxisLine => "#6366f1",
            ThemeToken::TextPrimary => "#22223b",
            ThemeToken::TextDone => "#888888",
        }
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task_box(w: f64, label: &str) -> RenderCommand {
        RenderCommand::DrawRect {
            rect: Rect::new(70.0, 810.0, w, 108.0),
            color: ThemeToken::TaskPending,
            border_color: Some(ThemeToken::TaskBorder),
            label: Some(label.into()),
            task_index: Some(0),
        }
    }

    #[test]
    fn basic_svg_output() {
        let svg = render_svg(&[task_box(236.0, "Gym")], 390.0, 2592.0, false);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("Gym"));
        assert!(svg.contains("#fbbf24"));
        assert!(svg.contains(r#"rx="7""#));
    }

    #[test]
    fn dark_palette() {
        let svg = render_svg(&[task_box(236.0, "Gym")], 390.0, 2592.0, true);
        assert!(svg.contains("#b7791f"));
    }

    #[test]
    fn escapes_xml_entities() {
        let svg = render_svg(&[task_box(236.0, "Q&A <team>")], 390.0, 2592.0, false);
        assert!(svg.contains("Q&amp;A &lt;team&gt;"));
    }

    #[test]
    fn truncates_long_titles_in_narrow_boxes() {
        let svg = render_svg(&[task_box(60.0, "Quarterly planning")], 390.0, 2592.0, false);
        // (60 - 12) / 7 = 6 chars: five plus the ellipsis.
        assert!(svg.contains(">Quart…</text>"));
        assert!(svg.contains("<title>Quarterly planning</title>"));
    }

    #[test]
    fn right_aligned_text_anchors_at_end() {
        let cmd = RenderCommand::DrawText {
            position: dayplan_protocol::Point::new(64.0, 12.0),
            text: "00:00".into(),
            color: ThemeToken::TextPrimary,
            font_size: 12.0,
            align: TextAlign::Right,
        };
        let svg = render_svg(&[cmd], 390.0, 100.0, false);
        assert!(svg.contains(r#"text-anchor="end">00:00</text>"#));
    }
}
