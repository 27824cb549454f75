// Allow dead code: Style functions defined for consistent UI
#![allow(dead_code)]

use ratatui::style::{Color, Modifier, Style};
use walkwise_core::models::{CameraStatus, NoticeKind, ReportStatus, RiskLevel, Severity};

// Color palette
pub const PRIMARY: Color = Color::Rgb(64, 128, 192);
pub const SECONDARY: Color = Color::Rgb(96, 160, 96);
pub const ACCENT: Color = Color::Rgb(192, 160, 64);
pub const ERROR: Color = Color::Rgb(192, 64, 64);
pub const MUTED: Color = Color::Rgb(128, 128, 128);
pub const HIGHLIGHT: Color = Color::Rgb(48, 48, 64);

// Styles
pub fn title_style() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn selected_style() -> Style {
    Style::default()
        .bg(HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

pub fn list_item_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn muted_style() -> Style {
    Style::default().fg(MUTED)
}

pub fn highlight_style() -> Style {
    Style::default().fg(ACCENT)
}

pub fn success_style() -> Style {
    Style::default().fg(SECONDARY)
}

pub fn error_style() -> Style {
    Style::default().fg(ERROR)
}

pub fn tab_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(PRIMARY)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(Color::White)
    }
}

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(PRIMARY)
    } else {
        Style::default().fg(MUTED)
    }
}

pub fn status_bar_style() -> Style {
    Style::default().bg(Color::Rgb(32, 32, 40)).fg(Color::White)
}

pub fn help_key_style() -> Style {
    Style::default()
        .fg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn help_desc_style() -> Style {
    Style::default().fg(Color::White)
}

// Domain-specific colors

pub fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Low => Style::default().fg(SECONDARY),
        Severity::Medium => Style::default().fg(ACCENT),
        Severity::High => Style::default().fg(ERROR),
    }
}

pub fn report_status_style(status: ReportStatus) -> Style {
    match status {
        ReportStatus::Pending => Style::default().fg(ACCENT),
        ReportStatus::Reviewing => Style::default().fg(PRIMARY),
        ReportStatus::Verified => Style::default().fg(SECONDARY),
        ReportStatus::Rejected => Style::default().fg(ERROR),
    }
}

pub fn risk_style(level: RiskLevel) -> Style {
    match level {
        RiskLevel::Low => Style::default().fg(SECONDARY),
        RiskLevel::Medium => Style::default().fg(ACCENT),
        RiskLevel::High => Style::default().fg(ERROR),
    }
}

pub fn camera_style(status: CameraStatus) -> Style {
    match status {
        CameraStatus::Active => Style::default().fg(SECONDARY),
        CameraStatus::Maintenance => Style::default().fg(ACCENT),
        CameraStatus::Inactive => Style::default().fg(MUTED),
    }
}

pub fn notice_style(kind: NoticeKind) -> Style {
    match kind {
        NoticeKind::Alert => Style::default().fg(ERROR),
        NoticeKind::Warning => Style::default().fg(ACCENT),
        NoticeKind::Info => Style::default().fg(PRIMARY),
    }
}

/// Safety scores read green above 80, amber above 60, red below
pub fn score_style(score: u8) -> Style {
    if score >= 80 {
        Style::default().fg(SECONDARY)
    } else if score >= 60 {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(ERROR)
    }
}
