// StrucTTY: interactive data-structure visualizer for the terminal

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use structty::ui::app::PanelKind;
use structty::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    let kind = match args.get(1) {
        None => PanelKind::Array,
        Some(arg) => match PanelKind::from_arg(arg) {
            Some(kind) => kind,
            None => {
                let program_name = args.first().map(|s| s.as_str()).unwrap_or("structty");
                eprintln!("Error: Unknown panel '{}'", arg);
                eprintln!();
                eprintln!("Usage: {} [panel]", program_name);
                eprintln!();
                eprintln!("Panels:");
                eprintln!("  array | stack | queue | list | bst | graph | hash | sort");
                eprintln!();
                eprintln!("Examples:");
                eprintln!("  {}              # start on the array panel", program_name);
                eprintln!("  {} sort         # start on the sorting panel", program_name);
                std::process::exit(1);
            }
        },
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(kind);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
