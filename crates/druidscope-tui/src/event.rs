//! Terminal event polling

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use druidscope_app::message::Message;
use druidscope_app::reveal::TICK_MS;
use druidscope_app::InputKey;
use druidscope_core::prelude::*;
use std::time::{Duration, Instant};

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Delete => Some(InputKey::Delete),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        KeyCode::F(n) => Some(InputKey::F(n)),
        _ => None,
    }
}

/// Most ticks replayed at once after a stall, so a suspended process does
/// not fast-forward every animation on resume.
const MAX_CATCH_UP: u32 = 4;

/// Schedules `Message::Tick` on wall-clock time, independent of input.
#[derive(Debug, Clone, Copy)]
pub struct TickTimer {
    last: Instant,
    period: Duration,
}

impl TickTimer {
    pub fn new(now: Instant) -> Self {
        Self {
            last: now,
            period: Duration::from_millis(TICK_MS),
        }
    }

    /// How long input polling may block before the next tick is due.
    pub fn until_next(&self, now: Instant) -> Duration {
        (self.last + self.period).saturating_duration_since(now)
    }

    /// Number of ticks that fell due since the last call, capped.
    pub fn due(&mut self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.last);
        let ticks = (elapsed.as_millis() / self.period.as_millis()) as u64;
        if ticks == 0 {
            return 0;
        }
        if ticks > MAX_CATCH_UP as u64 {
            self.last = now;
            return MAX_CATCH_UP;
        }
        self.last += self.period * ticks as u32;
        ticks as u32
    }
}

/// Wait up to `timeout` for input.
///
/// Returns `None` on timeout and for events that map to no message. Key
/// releases and repeats from terminals that report them are dropped.
pub fn poll(timeout: Duration) -> Result<Option<Message>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            Ok(key_event_to_input(key).map(Message::Key))
        }
        // Resizes need no message: every loop iteration redraws
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Option<InputKey> {
        key_event_to_input(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_view_and_card_keys() {
        assert_eq!(press(KeyCode::Char('3')), Some(InputKey::Char('3')));
        assert_eq!(press(KeyCode::Char('j')), Some(InputKey::Char('j')));
        assert_eq!(press(KeyCode::Char('G')), Some(InputKey::Char('G')));
        assert_eq!(press(KeyCode::Enter), Some(InputKey::Enter));
        assert_eq!(press(KeyCode::Esc), Some(InputKey::Esc));
    }

    #[test]
    fn test_ctrl_c_is_distinct_from_c() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(key), Some(InputKey::CharCtrl('c')));
    }

    #[test]
    fn test_scroll_keys() {
        assert_eq!(press(KeyCode::PageUp), Some(InputKey::PageUp));
        assert_eq!(press(KeyCode::PageDown), Some(InputKey::PageDown));
        assert_eq!(press(KeyCode::Home), Some(InputKey::Home));
        assert_eq!(press(KeyCode::End), Some(InputKey::End));
    }

    #[test]
    fn test_shift_tab_variants() {
        let shifted = KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(shifted), Some(InputKey::BackTab));
        assert_eq!(press(KeyCode::BackTab), Some(InputKey::BackTab));
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_tick_waits_for_full_period() {
        let start = Instant::now();
        let mut timer = TickTimer::new(start);
        assert_eq!(timer.until_next(start), ms(TICK_MS));
        assert_eq!(timer.until_next(start + ms(20)), ms(TICK_MS - 20));
        assert_eq!(timer.due(start + ms(TICK_MS - 1)), 0);
        assert_eq!(timer.due(start + ms(TICK_MS)), 1);
        assert_eq!(timer.until_next(start + ms(TICK_MS)), ms(TICK_MS));
    }

    #[test]
    fn test_ticks_keep_coming_under_steady_input() {
        // Keys every 10ms would always beat a 50ms poll timeout
        let start = Instant::now();
        let mut timer = TickTimer::new(start);
        let ticks: u32 = (1..=100).map(|i| timer.due(start + ms(i * 10))).sum();
        assert_eq!(ticks as u64, 1_000 / TICK_MS);
    }

    #[test]
    fn test_tick_phase_is_kept_between_polls() {
        let start = Instant::now();
        let mut timer = TickTimer::new(start);
        assert_eq!(timer.due(start + ms(TICK_MS + 30)), 1);
        // The leftover 30ms counts toward the next tick
        assert_eq!(timer.until_next(start + ms(TICK_MS + 30)), ms(TICK_MS - 30));
        assert_eq!(timer.due(start + ms(2 * TICK_MS)), 1);
    }

    #[test]
    fn test_stall_catch_up_is_capped() {
        let start = Instant::now();
        let mut timer = TickTimer::new(start);
        let resumed = start + Duration::from_secs(10);
        assert_eq!(timer.due(resumed), MAX_CATCH_UP);
        assert_eq!(timer.due(resumed), 0);
        assert_eq!(timer.until_next(resumed), ms(TICK_MS));
    }

    #[test]
    fn test_overdue_tick_does_not_block() {
        let start = Instant::now();
        let timer = TickTimer::new(start);
        assert_eq!(timer.until_next(start + ms(3 * TICK_MS)), Duration::ZERO);
    }

    #[test]
    fn test_unsupported_keys_are_ignored() {
        assert_eq!(press(KeyCode::Insert), None);
        assert_eq!(press(KeyCode::CapsLock), None);
    }
}
