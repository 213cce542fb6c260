use super::Moderator;
use crate::game::{GameResults, Winner};
use crate::screen::{Modal, Screen};
use anyhow::Result;

const COL_WIDTH: usize = 20;
const COL_SPACE: usize = 2;

/// The banner announcing the winning team.
pub fn winner_title(winner: Winner) -> &'static str {
    match winner {
        Winner::Village => "Village Victory!",
        Winner::TannerAndVillage => "Village & Tanner Victory!",
        Winner::Tanner => "Tanner Victory!",
        Winner::Werewolves => "Werewolf Victory!",
        Winner::NoOne => "No one wins!",
    }
}

fn row(cols: [&str; 3]) -> String {
    let [a, b, c] = cols;
    format!("{:<w$}{:<w$}{:<w$}", a, b, c, w = COL_WIDTH)
        .trim_end()
        .to_string()
}

fn table(lines: &mut Vec<String>, heading: &str, first_col: &str, rows: Vec<[String; 3]>) {
    let divider = "=".repeat(COL_WIDTH - COL_SPACE);
    lines.push(format!("{:^w$}", heading, w = COL_WIDTH * 3).trim_end().to_string());
    lines.push(String::new());
    lines.push(row([first_col, "Dealt Card", "Final Card"]));
    lines.push(row([&divider, &divider, &divider]));
    for [a, b, c] in &rows {
        lines.push(row([a, b, c]));
    }
}

/// Lays out every player's and table spot's dealt and final card, then the winner.
pub fn results_table(results: &GameResults) -> String {
    let mut lines = vec![];

    let players = results
        .players
        .iter()
        .map(|p| [p.name.clone(), p.dealt.to_string(), p.card.to_string()])
        .collect();
    table(&mut lines, "- Player Results -", "Player", players);
    lines.push(String::new());

    let spots = results
        .dealt_table
        .iter()
        .zip(&results.table)
        .enumerate()
        .map(|(n, (dealt, card))| [format!("Card {}", n + 1), dealt.to_string(), card.to_string()])
        .collect();
    table(&mut lines, "- Cards Dealt to the Table -", "Table Spot", spots);
    lines.push(String::new());

    let banner = format!("*** {} ***", winner_title(results.winner));
    lines.push(format!("{:^w$}", banner, w = COL_WIDTH * 3).trim_end().to_string());
    lines.join("\n")
}

impl<S: Screen + ?Sized> Moderator<'_, S> {
    /// Reveals every card and the winning team.
    pub(super) fn show_results(&mut self) -> Result<GameResults> {
        let results = self.game.post_game_results()?;
        log::info!("game results: {}", serde_json::to_string(&results)?);
        let modal = Modal::new(results_table(&results))
            .title(winner_title(results.winner))
            .preformatted();
        self.show(modal)?;
        Ok(results)
    }
}
