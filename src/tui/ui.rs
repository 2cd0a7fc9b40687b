//! UI rendering using ratatui
//!
//! - Playing: header, scrambled word, guess input, feedback, score
//! - Game over: final score with play-again / exit hints

use crate::app::App;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Render the current snapshot
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with language, round
            Constraint::Min(0),    // Main content area
            Constraint::Length(2), // Key help
        ])
        .split(area);

    render_header(frame, layout[0], app);

    if app.view().is_game_over {
        render_game_over(frame, layout[1], app);
    } else {
        render_puzzle(frame, layout[1], app);
    }

    render_footer(frame, layout[2], app.view().is_game_over);
}

/// Render the header: title | language | round counter
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12), // Title
            Constraint::Min(10),    // Language
            Constraint::Length(12), // Round
        ])
        .split(inner);

    let title = Paragraph::new("UNSCRAMBLE")
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Left);
    frame.render_widget(title, header_layout[0]);

    let language = Paragraph::new(app.view().language.label())
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);
    frame.render_widget(language, header_layout[1]);

    let round = Paragraph::new(format_round(app.view().round, app.max_rounds()))
        .style(Style::default().fg(Color::Green).bold())
        .alignment(Alignment::Right);
    frame.render_widget(round, header_layout[2]);
}

/// Render the scrambled word and the guess input
fn render_puzzle(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.view();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Scrambled word
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Instructions
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Input box
            Constraint::Length(1), // Feedback line
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Score
            Constraint::Min(0),    // Remaining space
        ])
        .split(area);

    let word = Paragraph::new(format_scrambled(&view.scrambled_word))
        .style(Style::default().fg(Color::Cyan).bold())
        .alignment(Alignment::Center);
    frame.render_widget(word, main_layout[0]);

    let instructions = Paragraph::new("Unscramble the word using all the letters.")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(instructions, main_layout[2]);

    let (border_color, title) = if view.is_guess_wrong {
        (Color::Red, "Wrong guess!")
    } else {
        (Color::White, "Enter your word")
    };
    let input = Paragraph::new(format!("> {}_", view.user_guess)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title),
    );
    frame.render_widget(input, main_layout[4]);

    if let Some(feedback) = app.feedback() {
        let feedback = Paragraph::new(feedback)
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        frame.render_widget(feedback, main_layout[5]);
    }

    let score_display = format!("Score: {}  (+{} per word)", view.score, app.score_increment());
    let score = Paragraph::new(score_display)
        .style(Style::default().fg(Color::Magenta).bold())
        .alignment(Alignment::Center);
    frame.render_widget(score, main_layout[7]);
}

/// Render the end-of-game dialog
fn render_game_over(frame: &mut Frame, area: Rect, app: &App) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Final score
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Instructions
            Constraint::Min(0),    // Remaining space
        ])
        .split(area);

    let title = Paragraph::new("Congratulations!")
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center);
    frame.render_widget(title, main_layout[0]);

    let score = Paragraph::new(format!("You scored: {}", app.view().score))
        .style(Style::default().fg(Color::Magenta).bold())
        .alignment(Alignment::Center);
    frame.render_widget(score, main_layout[2]);

    let instructions = Paragraph::new("Press ENTER to play again or ESC to exit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(instructions, main_layout[4]);
}

fn render_footer(frame: &mut Frame, area: Rect, is_game_over: bool) {
    let help = if is_game_over {
        "Enter/R Play Again  Esc Exit"
    } else {
        "Enter Submit  Tab Skip  F2 Language  Esc Quit"
    };
    let footer = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Format the scrambled word as spaced capitals
fn format_scrambled(word: &str) -> String {
    word.to_uppercase()
        .chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format the round counter
fn format_round(round: u32, max_rounds: u32) -> String {
    format!("Word {}/{}", round, max_rounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use unscramble::{GameConfig, GameEngine, Language, WordCorpus};

    fn app(max_rounds: u32) -> App {
        let corpus = WordCorpus::new().with_words(Language::English, ["apple"]);
        let config = GameConfig {
            max_rounds,
            language: Language::English,
            ..GameConfig::default()
        };
        App::new(GameEngine::with_rng(corpus, &config, StdRng::seed_from_u64(1)))
    }

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_format_scrambled() {
        assert_eq!(format_scrambled("pleap"), "P L E A P");
        assert_eq!(format_scrambled("тко"), "Т К О");
        assert_eq!(format_scrambled(""), "");
    }

    #[test]
    fn test_format_round() {
        assert_eq!(format_round(3, 10), "Word 3/10");
    }

    #[test]
    fn test_render_playing_screen() {
        let app = app(10);
        let text = screen_text(&app);
        assert!(text.contains("UNSCRAMBLE"));
        assert!(text.contains("Word 1/10"));
        assert!(text.contains("Score: 0"));
        assert!(text.contains("+20 per word"));
        assert!(text.contains("English"));
    }

    #[test]
    fn test_render_wrong_guess() {
        let mut app = app(10);
        app.on_char('x');
        app.on_submit();
        let text = screen_text(&app);
        assert!(text.contains("Wrong guess!"));
    }

    #[test]
    fn test_render_game_over() {
        let mut app = app(1);
        for c in "apple".chars() {
            app.on_char(c);
        }
        app.on_submit();
        let text = screen_text(&app);
        assert!(text.contains("Congratulations!"));
        assert!(text.contains("You scored: 20"));
    }
}
