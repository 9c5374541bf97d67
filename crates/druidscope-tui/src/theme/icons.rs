//! Icon glyphs for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` - single-width symbols that work in all terminals
//! - `IconMode::NerdFonts` - Font Awesome glyphs from a patched Nerd Font
//!
//! Every diagram symbol (`IconKind`) is drawn in its brand color at one of
//! three sizes: a bare glyph, glyph plus abbreviation, or a filled label.

use druidscope_app::config::IconMode;
use druidscope_core::{EndpointKind, IconKind};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

/// Rendered size of a diagram symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSize {
    /// Glyph only (flow steps, tiles)
    Small,
    /// Glyph and abbreviation (cards)
    Medium,
    /// Abbreviation on a brand-colored fill (popover title)
    Large,
}

/// Frames of the rotating header icon.
const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> IconMode {
        self.mode
    }

    /// Single-cell glyph for a diagram symbol.
    pub fn glyph(&self, kind: IconKind) -> &'static str {
        match self.mode {
            IconMode::Unicode => unicode_glyph(kind),
            IconMode::NerdFonts => nerd_glyph(kind),
        }
    }

    pub fn brand_color(kind: IconKind) -> Color {
        let (r, g, b) = kind.brand_color();
        Color::Rgb(r, g, b)
    }

    /// Styled spans for `kind` at `size`.
    pub fn spans(&self, kind: IconKind, size: IconSize) -> Vec<Span<'static>> {
        let color = Self::brand_color(kind);
        match size {
            IconSize::Small => vec![Span::styled(self.glyph(kind), Style::default().fg(color))],
            IconSize::Medium => vec![
                Span::styled(self.glyph(kind), Style::default().fg(color)),
                Span::raw(" "),
                Span::styled(
                    kind.abbreviation(),
                    Style::default().fg(color).add_modifier(Modifier::DIM),
                ),
            ],
            IconSize::Large => vec![Span::styled(
                format!(" {} {} ", self.glyph(kind), kind.abbreviation()),
                Style::default()
                    .fg(Color::Black)
                    .bg(color)
                    .add_modifier(Modifier::BOLD),
            )],
        }
    }

    pub fn endpoint(&self, kind: EndpointKind) -> &'static str {
        match (self.mode, kind) {
            (IconMode::Unicode, EndpointKind::Client) => "◎",
            (IconMode::Unicode, EndpointKind::Results) => "▤",
            (IconMode::Unicode, EndpointKind::Source) => "≋",
            (IconMode::Unicode, EndpointKind::Files) => "▭",
            (IconMode::NerdFonts, EndpointKind::Client) => "\u{f007}", // nf-fa-user
            (IconMode::NerdFonts, EndpointKind::Results) => "\u{f0ce}", // nf-fa-table
            (IconMode::NerdFonts, EndpointKind::Source) => "\u{f09e}", // nf-fa-rss
            (IconMode::NerdFonts, EndpointKind::Files) => "\u{f07b}", // nf-fa-folder
        }
    }

    // --- Status and chrome ---

    pub fn dot(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f444}", // nf-oct-dot_fill
            IconMode::Unicode => "\u{25cf}",   // ●
        }
    }

    pub fn circle(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f10c}", // nf-fa-circle_o
            IconMode::Unicode => "\u{25cb}",   // ○
        }
    }

    /// Marker telling the user a card has a detail popover
    pub fn info(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f05a}", // nf-fa-info_circle
            IconMode::Unicode => "\u{24d8}",   // ⓘ
        }
    }

    pub fn link(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f08e}", // nf-fa-external_link
            IconMode::Unicode => "\u{2197}",   // ↗
        }
    }

    pub fn chevron_right(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f054}", // nf-fa-chevron_right
            IconMode::Unicode => "\u{203a}",   // ›
        }
    }

    /// Frame of the rotating header icon.
    pub fn spinner(&self, frame: usize) -> &'static str {
        SPINNER[frame % SPINNER.len()]
    }

    pub fn spinner_frames(&self) -> usize {
        SPINNER.len()
    }
}

fn unicode_glyph(kind: IconKind) -> &'static str {
    match kind {
        IconKind::Druid => "◆",
        IconKind::Coordinator => "◈",
        IconKind::Broker => "⇄",
        IconKind::Historical => "▤",
        IconKind::Overlord => "◉",
        IconKind::Router => "↯",
        IconKind::MiddleManager => "▣",
        IconKind::Vpc => "⌂",
        IconKind::Eks => "⎈",
        IconKind::S3 => "▦",
        IconKind::Rds => "▥",
        IconKind::Msk => "≋",
        IconKind::Iam => "⊛",
        IconKind::SecretsManager => "⊠",
        IconKind::Alb => "⋔",
        IconKind::CloudWatch => "◔",
        IconKind::Helm => "⎈",
        IconKind::Cdk => "▧",
        IconKind::Kubernetes => "⎈",
        IconKind::Karpenter => "▲",
        IconKind::Grafana => "◒",
        IconKind::CertManager => "✓",
        IconKind::Zookeeper => "◍",
        IconKind::Docker => "▭",
        IconKind::PostgreSql => "▥",
        IconKind::ExternalSecrets => "⊡",
        IconKind::Tls => "⊕",
        IconKind::MetricsServer => "∿",
        IconKind::ExternalDns => "⊙",
        IconKind::Reloader => "↻",
        IconKind::Goldilocks => "◐",
        IconKind::Velero => "⇊",
        IconKind::Kyverno => "⊘",
        IconKind::NodeTerminationHandler => "⊖",
    }
}

fn nerd_glyph(kind: IconKind) -> &'static str {
    match kind {
        IconKind::Druid => "\u{f1c0}",       // nf-fa-database
        IconKind::Coordinator => "\u{f0e8}", // nf-fa-sitemap
        IconKind::Broker => "\u{f0ec}",      // nf-fa-exchange
        IconKind::Historical => "\u{f1da}",  // nf-fa-history
        IconKind::Overlord => "\u{f0ae}",    // nf-fa-tasks
        IconKind::Router => "\u{f074}",      // nf-fa-random
        IconKind::MiddleManager => "\u{f085}", // nf-fa-cogs
        IconKind::Vpc => "\u{f0c2}",         // nf-fa-cloud
        IconKind::Eks | IconKind::Kubernetes | IconKind::Helm => "\u{f13d}", // nf-fa-anchor
        IconKind::S3 => "\u{f187}",          // nf-fa-archive
        IconKind::Rds | IconKind::PostgreSql => "\u{f1c0}", // nf-fa-database
        IconKind::Msk => "\u{f0e7}",         // nf-fa-bolt
        IconKind::Iam => "\u{f084}",         // nf-fa-key
        IconKind::SecretsManager | IconKind::ExternalSecrets => "\u{f023}", // nf-fa-lock
        IconKind::Alb => "\u{f0ac}",         // nf-fa-globe
        IconKind::CloudWatch => "\u{f06e}",  // nf-fa-eye
        IconKind::Cdk => "\u{f121}",         // nf-fa-code
        IconKind::Karpenter => "\u{f1b3}",   // nf-fa-cubes
        IconKind::Grafana => "\u{f201}",     // nf-fa-line_chart
        IconKind::CertManager | IconKind::Tls => "\u{f0a3}", // nf-fa-certificate
        IconKind::Zookeeper => "\u{f233}",   // nf-fa-server
        IconKind::Docker => "\u{f21a}",      // nf-fa-ship
        IconKind::MetricsServer => "\u{f0e4}", // nf-fa-tachometer
        IconKind::ExternalDns => "\u{f0ac}", // nf-fa-globe
        IconKind::Reloader => "\u{f021}",    // nf-fa-refresh
        IconKind::Goldilocks => "\u{f1de}",  // nf-fa-sliders
        IconKind::Velero => "\u{f0a0}",      // nf-fa-hdd_o
        IconKind::Kyverno => "\u{f132}",     // nf-fa-shield
        IconKind::NodeTerminationHandler => "\u{f011}", // nf-fa-power_off
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn test_unicode_glyphs_are_single_width() {
        let icons = IconSet::new(IconMode::Unicode);
        for kind in IconKind::ALL {
            assert_eq!(icons.glyph(kind).width(), 1, "{:?}", kind);
        }
    }

    #[test]
    fn test_modes_differ() {
        let unicode = IconSet::new(IconMode::Unicode);
        let nerd = IconSet::new(IconMode::NerdFonts);
        assert_ne!(unicode.glyph(IconKind::S3), nerd.glyph(IconKind::S3));
        assert_ne!(unicode.dot(), nerd.dot());
    }

    #[test]
    fn test_icon_sizes() {
        let icons = IconSet::new(IconMode::Unicode);
        assert_eq!(icons.spans(IconKind::Druid, IconSize::Small).len(), 1);

        let medium: String = icons
            .spans(IconKind::Druid, IconSize::Medium)
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(medium, "◆ DRD");

        let large = icons.spans(IconKind::S3, IconSize::Large);
        assert_eq!(large[0].content, " ▦ S3 ");
        assert_eq!(large[0].style.bg, Some(IconSet::brand_color(IconKind::S3)));
    }

    #[test]
    fn test_spinner_wraps() {
        let icons = IconSet::new(IconMode::Unicode);
        assert_eq!(icons.spinner(0), icons.spinner(4));
        assert_ne!(icons.spinner(0), icons.spinner(1));
    }
}
