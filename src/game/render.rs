//! Red Button Clicker rendering: tabs, stat cards, the big red button, and
//! the confirmation dialogs.

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::ClickState;
use crate::widgets::{ClickableList, TabBar};

use super::actions;
use super::logic::format_number;
use super::state::{Dialog, GameState, Tab};

/// The big red button — idle and pressed art.
const BUTTON_ART: &[&str] = &[
    "╭──────────────────╮",
    "│                  │",
    "│     PRESS ME     │",
    "│                  │",
    "╰──────────────────╯",
];
const BUTTON_PRESSED_ART: &[&str] = &[
    "╭──────────────────╮",
    "│░░░░░░░░░░░░░░░░░░│",
    "│░░░░ PRESS ME ░░░░│",
    "│░░░░░░░░░░░░░░░░░░│",
    "╰──────────────────╯",
];

pub fn render(state: &GameState, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(1), // tab bar
            Constraint::Min(5),    // tab content
            Constraint::Length(1), // help bar
        ])
        .split(area);

    render_header(f, chunks[0]);
    render_tab_bar(state, f, chunks[1], cs);
    match state.tab {
        Tab::Button => render_button_tab(state, f, chunks[2], cs),
        Tab::Shop => render_shop_tab(state, f, chunks[2], cs),
        Tab::Audio => render_audio_tab(state, f, chunks[2], cs),
    }
    render_help_bar(state, f, chunks[3]);

    // Drawn last so it sits on top and owns every click target.
    if state.dialog != Dialog::None {
        render_dialog(state, f, area, cs);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            " 🔴 Red Button Clicker ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "— Clicks earn points. Buy upgrades. Profit.",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_tab_bar(state: &GameState, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let tab_style = |tab: Tab, color: Color| -> Style {
        if state.tab == tab {
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        }
    };

    TabBar::new("│")
        .tab(
            "[B] Button",
            tab_style(Tab::Button, Color::Red),
            actions::TAB_BUTTON,
        )
        .tab(
            "[S] Shop",
            tab_style(Tab::Shop, Color::Green),
            actions::TAB_SHOP,
        )
        .tab(
            "[A] Audio",
            tab_style(Tab::Audio, Color::Cyan),
            actions::TAB_AUDIO,
        )
        .render(f, area, cs);
}

// ── Button tab ─────────────────────────────────────────────────

fn render_button_tab(state: &GameState, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // stat cards
            Constraint::Min(7),    // the button itself
            Constraint::Length(3), // reset buttons
        ])
        .split(area);

    render_stat_cards(state, f, chunks[0]);
    render_big_button(state, f, chunks[1], cs);
    render_reset_buttons(f, chunks[2], cs);
}

fn render_stat_cards(state: &GameState, f: &mut Frame, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let auto_value = format!("{} → {} cps", state.auto_count, format_number(state.cps()));
    stat_card(f, cards[0], "Score", &format_number(state.score), Color::Yellow);
    stat_card(f, cards[1], "Per Click", &format_number(state.per_click), Color::White);
    stat_card(f, cards[2], "Auto-Clickers", &auto_value, Color::Cyan);
    stat_card(
        f,
        cards[3],
        "Total Clicks",
        &format_number(state.total_clicks),
        Color::White,
    );
}

fn stat_card(f: &mut Frame, area: Rect, label: &str, value: &str, color: Color) {
    let widget = Paragraph::new(Line::from(Span::styled(
        format!(" {}", value),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", label)),
    );
    f.render_widget(widget, area);
}

fn render_big_button(state: &GameState, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let art = if state.click_flash > 0 {
        BUTTON_PRESSED_ART
    } else {
        BUTTON_ART
    };
    let art_w = art[0].chars().count() as u16;
    let art_h = art.len() as u16;

    let x = area.x + area.width.saturating_sub(art_w) / 2;
    let y = area.y + area.height.saturating_sub(art_h) / 2;
    let button_area = Rect::new(
        x,
        y,
        art_w.min(area.width),
        art_h.min(area.height),
    );

    let style = if state.click_flash > 0 {
        Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    };
    let lines: Vec<Line> = art.iter().map(|row| Line::from(Span::styled(*row, style))).collect();
    f.render_widget(Paragraph::new(lines), button_area);

    cs.add_target(button_area, actions::CLICK_BUTTON);
}

fn render_reset_buttons(f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let reset = Paragraph::new(Line::from(Span::styled(
        " [R] RESET ",
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Green)));
    f.render_widget(reset, halves[0]);
    cs.add_target(halves[0], actions::OPEN_RESET_ALL);

    let reset_clicks = Paragraph::new(Line::from(Span::styled(
        " [T] RESET CLICKS ",
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Yellow)));
    f.render_widget(reset_clicks, halves[1]);
    cs.add_target(halves[1], actions::OPEN_RESET_CLICKS);
}

// ── Shop tab ───────────────────────────────────────────────────

fn render_shop_tab(state: &GameState, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    shop_item(
        f,
        halves[0],
        cs,
        &format!("Multiplier (Lvl {})", state.mult_level),
        "Doubles your per-click power (×2).",
        state.multiplier_cost(),
        state.score >= state.multiplier_cost(),
        '1',
        actions::BUY_MULTIPLIER,
        Color::Magenta,
    );
    shop_item(
        f,
        halves[1],
        cs,
        &format!("Auto-Clicker (Lvl {})", state.auto_count),
        "Doubles your auto CPS each level (1 → 2 → 4 → 8…).",
        state.auto_cost(),
        state.score >= state.auto_cost(),
        '2',
        actions::BUY_AUTO,
        Color::Cyan,
    );
}

#[allow(clippy::too_many_arguments)]
fn shop_item(
    f: &mut Frame,
    area: Rect,
    cs: &mut ClickState,
    name: &str,
    desc: &str,
    cost: u64,
    afford: bool,
    key: char,
    action_id: u16,
    color: Color,
) {
    let buy_style = if afford {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut cl = ClickableList::new();
    cl.push(Line::from(Span::styled(
        format!(" {}", name),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));
    cl.push(Line::from(Span::styled(
        format!(" {}", desc),
        Style::default().fg(Color::DarkGray),
    )));
    cl.push(Line::from(""));
    cl.push_clickable(
        Line::from(Span::styled(
            format!(" [{}] Buy — {} pts", key.to_ascii_uppercase(), format_number(cost)),
            buy_style,
        )),
        action_id,
    );
    cl.register_targets(area, cs, 1);

    let widget = Paragraph::new(cl.into_lines()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );
    f.render_widget(widget, area);
}

// ── Audio tab ──────────────────────────────────────────────────

fn render_audio_tab(state: &GameState, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let label_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let step_style = Style::default().fg(Color::Cyan);

    let mut cl = ClickableList::new();
    cl.push(Line::from(Span::styled(" Waveform", label_style)));
    cl.push_clickable(
        Line::from(Span::styled(
            format!(" [W] {} ▸", state.audio.waveform.name()),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        actions::AUDIO_WAVEFORM_NEXT,
    );
    cl.push(Line::from(""));
    cl.push(Line::from(Span::styled(
        format!(" Frequency (Hz): {:.0}", state.audio.frequency_hz),
        label_style,
    )));
    cl.push_clickable(
        Line::from(Span::styled(" [-] −10 Hz", step_style)),
        actions::AUDIO_FREQ_DOWN,
    );
    cl.push_clickable(
        Line::from(Span::styled(" [+] +10 Hz", step_style)),
        actions::AUDIO_FREQ_UP,
    );
    cl.push(Line::from(""));
    cl.push(Line::from(Span::styled(
        format!(" Duration (seconds): {:.2}", state.audio.duration_sec),
        label_style,
    )));
    cl.push_clickable(
        Line::from(Span::styled(" ◂ −0.05 s", step_style)),
        actions::AUDIO_DUR_DOWN,
    );
    cl.push_clickable(
        Line::from(Span::styled(" ▸ +0.05 s", step_style)),
        actions::AUDIO_DUR_UP,
    );
    cl.register_targets(area, cs, 1);

    let widget = Paragraph::new(cl.into_lines()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Click Sound "),
    );
    f.render_widget(widget, area);
}

// ── Help bar and dialogs ───────────────────────────────────────

fn render_help_bar(state: &GameState, f: &mut Frame, area: Rect) {
    let text = if state.dialog != Dialog::None {
        " y: confirm   n/esc: cancel"
    } else {
        match state.tab {
            Tab::Button => " c/space: press   r: reset   t: reset clicks   b/s/a: tabs",
            Tab::Shop => " 1: buy multiplier   2: buy auto-clicker   b/s/a: tabs",
            Tab::Audio => " w: waveform   -/+: frequency   [/]: duration   b/s/a: tabs",
        }
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(Color::DarkGray),
        ))),
        area,
    );
}

/// Modal confirmation overlay. Wipes every target registered so far, so while
/// a dialog is open the only clickable things on screen are its two buttons.
fn render_dialog(state: &GameState, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let (title, desc, accent) = match state.dialog {
        Dialog::ResetAll => (
            " Reset all progress? ",
            [
                "This will clear score, upgrades, and auto-clickers.",
                "Your total clicks will be preserved.",
            ],
            Color::Red,
        ),
        Dialog::ResetClicks => (
            " Reset total clicks? ",
            [
                "This will clear your lifetime total clicks count.",
                "Other progress will be preserved.",
            ],
            Color::Yellow,
        ),
        Dialog::None => return,
    };

    cs.clear_targets();

    // No wrapping: the button line must stay on a known row so its click
    // targets line up with what is drawn.
    let rect = centered_rect(area, 57, 7);
    f.render_widget(Clear, rect);

    let confirm_label = "   [Y] Yes, reset   ";
    let cancel_label = "   [N] Cancel   ";

    let desc_style = Style::default().fg(Color::White);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {}", desc[0]), desc_style)),
        Line::from(Span::styled(format!(" {}", desc[1]), desc_style)),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                confirm_label,
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                cancel_label,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .title(title),
    );
    f.render_widget(widget, rect);

    // The button line sits just above the bottom border. Targets must track
    // the rendered span extents exactly; the labels are left-aligned, so a
    // midpoint split would put the cancel label inside the confirm target.
    let button_row = rect.y + rect.height.saturating_sub(2);
    let inner_x = rect.x + 1;
    let inner_w = rect.width.saturating_sub(2);
    let confirm_w = (confirm_label.chars().count() as u16).min(inner_w);
    let cancel_w = (cancel_label.chars().count() as u16).min(inner_w.saturating_sub(confirm_w));
    cs.add_target(
        Rect::new(inner_x, button_row, confirm_w, 1),
        actions::DIALOG_CONFIRM,
    );
    cs.add_target(
        Rect::new(inner_x + confirm_w, button_row, cancel_w, 1),
        actions::DIALOG_CANCEL,
    );
}

/// A rect of at most `width`×`height` centered inside `area`.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratzilla::ratatui::backend::TestBackend;
    use ratzilla::ratatui::Terminal;

    fn draw(state: &GameState) -> (ClickState, String) {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut cs = ClickState::new();
        terminal
            .draw(|f| {
                let area = f.area();
                render(state, f, area, &mut cs);
            })
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        (cs, text)
    }

    fn registered_ids(cs: &ClickState) -> Vec<u16> {
        cs.targets.iter().map(|t| t.action_id).collect()
    }

    #[test]
    fn button_tab_registers_core_targets() {
        let state = GameState::new();
        let (cs, text) = draw(&state);
        let ids = registered_ids(&cs);

        assert!(text.contains("PRESS ME"));
        assert!(ids.contains(&actions::CLICK_BUTTON));
        assert!(ids.contains(&actions::OPEN_RESET_ALL));
        assert!(ids.contains(&actions::OPEN_RESET_CLICKS));
        assert!(ids.contains(&actions::TAB_SHOP));
    }

    #[test]
    fn shop_tab_registers_buy_targets() {
        let mut state = GameState::new();
        state.tab = Tab::Shop;
        let (cs, text) = draw(&state);
        let ids = registered_ids(&cs);

        assert!(text.contains("Multiplier (Lvl 0)"));
        assert!(text.contains("Auto-Clicker (Lvl 0)"));
        assert!(ids.contains(&actions::BUY_MULTIPLIER));
        assert!(ids.contains(&actions::BUY_AUTO));
        assert!(!ids.contains(&actions::CLICK_BUTTON));
    }

    #[test]
    fn audio_tab_registers_setting_targets() {
        let mut state = GameState::new();
        state.tab = Tab::Audio;
        let (cs, text) = draw(&state);
        let ids = registered_ids(&cs);

        assert!(text.contains("Square"));
        assert!(ids.contains(&actions::AUDIO_WAVEFORM_NEXT));
        assert!(ids.contains(&actions::AUDIO_FREQ_DOWN));
        assert!(ids.contains(&actions::AUDIO_FREQ_UP));
        assert!(ids.contains(&actions::AUDIO_DUR_DOWN));
        assert!(ids.contains(&actions::AUDIO_DUR_UP));
    }

    #[test]
    fn open_dialog_owns_all_click_targets() {
        let mut state = GameState::new();
        state.dialog = Dialog::ResetAll;
        let (cs, text) = draw(&state);
        let ids = registered_ids(&cs);

        assert!(text.contains("Reset all progress?"));
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&actions::DIALOG_CONFIRM));
        assert!(ids.contains(&actions::DIALOG_CANCEL));
    }

    #[test]
    fn dialog_labels_hit_their_own_targets() {
        let mut state = GameState::new();
        state.dialog = Dialog::ResetAll;
        let (cs, text) = draw(&state);

        // Cell coordinates of a rendered label (cells here are all width 1).
        let find = |needle: &str| -> (u16, u16) {
            for (row, line) in text.lines().enumerate() {
                if let Some(idx) = line.find(needle) {
                    let col = line[..idx].chars().count() as u16;
                    return (col, row as u16);
                }
            }
            panic!("{needle} not rendered");
        };

        let (yes_col, yes_row) = find("[Y] Yes, reset");
        assert_eq!(cs.hit_test(yes_col, yes_row), Some(actions::DIALOG_CONFIRM));

        let (no_col, no_row) = find("[N] Cancel");
        assert_eq!(cs.hit_test(no_col, no_row), Some(actions::DIALOG_CANCEL));
        // Every cell of the cancel label must cancel, not confirm.
        let cancel_end = no_col + "[N] Cancel".len() as u16 - 1;
        assert_eq!(cs.hit_test(cancel_end, no_row), Some(actions::DIALOG_CANCEL));
    }

    #[test]
    fn pressed_art_shown_during_flash() {
        let mut state = GameState::new();
        state.click_flash = 2;
        let (_, text) = draw(&state);
        assert!(text.contains("░░ PRESS ME ░░"));
    }

    #[test]
    fn stat_values_use_grouped_numbers() {
        let mut state = GameState::new();
        state.score = 1_234_567;
        let (_, text) = draw(&state);
        assert!(text.contains("1,234,567"));
    }
}
