use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pokedex_core::GameName;

/// Print the game-to-dex table.
pub(crate) fn run_games() {
    log::info!(
        "{}",
        "Supported games".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    for game in GameName::all() {
        let dexes: Vec<&str> = game.dexes().iter().map(|d| d.column()).collect();
        log::info!(
            "  {:<26} {:<8} {}",
            game.title().if_supports_color(Stdout, |t| t.bold()),
            game.region().name(),
            dexes.join(", ").if_supports_color(Stdout, |t| t.cyan()),
        );
        log::info!(
            "  {:<26} {}",
            "",
            format!("aliases: {}", game.aliases().join(", "))
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
}
