use super::{Key, Modal, Screen};
use crate::error::ScreenError;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io::{self, stdout, Stdout};

const BANNER: &str = "Werewolves!";
/// Columns taken by the modal's border and padding.
const FRAME_WIDTH: u16 = 4;
const MIN_WIDTH: u16 = 8;

/// The shared terminal all players look at.
///
/// Raw mode and the alternate screen are held for as long as this value lives,
/// and released when it is dropped, whichever way the session ends.
pub struct TerminalScreen {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalScreen {
    /// Takes over the terminal.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let terminal = execute!(stdout(), EnterAlternateScreen, Hide)
            .and_then(|_| Terminal::new(CrosstermBackend::new(stdout())));
        match terminal {
            Ok(terminal) => {
                let mut screen = Self { terminal };
                screen.terminal.clear()?;
                screen.terminal.draw(render_banner)?;
                Ok(screen)
            }
            Err(err) => {
                restore();
                Err(err)
            }
        }
    }

    fn draw(&mut self, modal: &Modal) -> io::Result<()> {
        self.terminal.draw(|frame| render_modal(frame, modal))?;
        Ok(())
    }

    /// Blocks until the player presses a key the modal accepts.
    fn read_key(&mut self, modal: &Modal) -> Result<Key, ScreenError> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if is_interrupt(&key) {
                        return Err(ScreenError::Interrupted);
                    }
                    let key = match key.code {
                        KeyCode::Enter => Key::Enter,
                        KeyCode::Char(c) => Key::Char(c),
                        _ => Key::Other,
                    };
                    if modal.accepts(key) {
                        return Ok(key);
                    }
                }
                Event::Resize(_, _) => self.draw(modal)?,
                _ => {}
            }
        }
    }
}

impl Screen for TerminalScreen {
    fn show_modal(&mut self, modal: &Modal) -> Result<Key, ScreenError> {
        self.draw(modal)?;
        let key = self.read_key(modal)?;
        // Wipe the dialog before the next player looks at the screen
        self.terminal.draw(render_banner)?;
        Ok(key)
    }
}

impl Drop for TerminalScreen {
    fn drop(&mut self) {
        self.terminal.show_cursor().ok();
        restore();
    }
}

fn restore() {
    disable_raw_mode().ok();
    execute!(stdout(), LeaveAlternateScreen, Show).ok();
}

/// Raw mode swallows the signal, so Ctrl-C arrives as a key.
fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn render_banner(frame: &mut Frame) {
    let banner = Span::styled(BANNER, Style::default().add_modifier(Modifier::REVERSED));
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(banner).centered());
    frame.render_widget(block, frame.area());
}

fn render_modal(frame: &mut Frame, modal: &Modal) {
    render_banner(frame);
    let popup = popup_area(modal, frame.area());
    frame.render_widget(Clear, popup);
    frame.render_widget(modal_paragraph(modal), popup);
}

/// The modal's bordered text, word-wrapped unless it is preformatted.
fn modal_paragraph(modal: &Modal) -> Paragraph<'_> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .padding(Padding::uniform(1));
    if let Some(title) = &modal.title {
        let title = Span::styled(title.as_str(), Style::default().add_modifier(Modifier::REVERSED));
        block = block.title(Line::from(title).centered());
    }
    if let Some(footer) = &modal.footer {
        let footer = Span::styled(footer.as_str(), Style::default().add_modifier(Modifier::BOLD));
        block = block.title_bottom(Line::from(footer).centered());
    }

    let text = modal.text.lines().map(Line::from).collect::<Vec<_>>();
    let paragraph = Paragraph::new(text).block(block);
    if modal.preformatted {
        paragraph
    } else {
        paragraph.wrap(Wrap { trim: false })
    }
}

/// Sizes the popup to fit the modal inside `area`: as narrow as the text allows,
/// at most two thirds of the screen unless preformatted, and tall enough for every line.
fn popup_area(modal: &Modal, area: Rect) -> Rect {
    let max_width = if modal.preformatted {
        area.width
    } else {
        (area.width / 3 * 2).max(MIN_WIDTH)
    };
    let paragraph = modal_paragraph(modal);

    let label_width = |label: &Option<String>| {
        label.as_ref().map_or(0, |s| s.chars().count()) + FRAME_WIDTH as usize
    };
    let width = [
        paragraph.line_width(),
        label_width(&modal.title),
        label_width(&modal.footer),
    ]
    .into_iter()
    .max()
    .unwrap_or(0)
    .min(max_width as usize);

    // Wrapping happens inside the border and padding
    let height = paragraph.line_count((width as u16).saturating_sub(FRAME_WIDTH));
    centered_rect(width, height, area)
}

/// A `width` by `height` rectangle centered in `area`, clipped to fit.
fn centered_rect(width: usize, height: usize, area: Rect) -> Rect {
    let width = (width.min(u16::MAX as usize) as u16).min(area.width);
    let height = (height.min(u16::MAX as usize) as u16).min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::{ANY_KEY_FOOTER, ENTER_FOOTER};
    use ratatui::backend::TestBackend;

    /// Renders the modal on a `width` by `height` screen and returns its rows.
    fn render(modal: &Modal, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render_modal(frame, modal)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn long_text_wraps_inside_the_popup() {
        let modal = Modal::new("the quick brown fox jumps over the lazy dog").title("Seer Phase");
        let popup = popup_area(&modal, Rect::new(0, 0, 30, 20));
        assert_eq!(popup.width, 20);
        // 16 columns of text: "the quick brown", "fox jumps over", "the lazy dog"
        assert_eq!(popup.height, 3 + 4);

        let rows = render(&modal, 30, 20);
        assert!(rows.iter().any(|row| row.contains("the quick brown")));
        assert!(rows.iter().any(|row| row.contains("the lazy dog")));
        assert!(rows.iter().any(|row| row.contains("Seer Phase")));
        assert!(rows.iter().any(|row| row.contains(ANY_KEY_FOOTER)));
    }

    #[test]
    fn wrapping_keeps_leading_indentation() {
        let modal = Modal::new("    indented words that go on and on");
        let rows = render(&modal, 30, 20);
        assert!(rows.iter().any(|row| row.contains("│     indented")));
    }

    #[test]
    fn preformatted_text_keeps_its_columns() {
        let text = "Alice               Werewolf            Robber";
        let modal = Modal::new(text).preformatted();
        let rows = render(&modal, 80, 10);
        assert!(rows.iter().any(|row| row.contains(text)));
    }

    #[test]
    fn short_text_makes_a_narrow_popup() {
        let modal = Modal::new("Zzzzzzzzzz").title("Robber Phase").enter();
        let popup = popup_area(&modal, Rect::new(0, 0, 80, 24));
        // The footer is the widest line
        assert_eq!(popup.width, ENTER_FOOTER.len() as u16 + 4);
        assert_eq!(popup.height, 5);
    }

    #[test]
    fn centered_rect_is_clipped() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect(10, 4, area), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect(50, 50, area), area);
    }
}
