// palintty: Pushdown-Automaton Palindrome Checker with Execution Traces

use std::io;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use palintty::ui::{App, CheckMode};

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [STRING] [--scan]", program_name);
    eprintln!();
    eprintln!("Checks whether STRING has the form w c reverse(w) over the alphabet {{a, b}}.");
    eprintln!("With no STRING, starts in edit mode so you can type one.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -s, --scan    Search every substring for an accepted factor");
    eprintln!("  -h, --help    Show this help");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} abcba            # Accepted: w = \"ab\"", program_name);
    eprintln!("  {} abaabcbaaa -s    # Finds the factor \"aabcbaa\"", program_name);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.get(0).map(|s| s.as_str()).unwrap_or("palintty");

    let mut input: Option<String> = None;
    let mut mode = CheckMode::Exact;
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--scan" | "-s" => mode = CheckMode::Substring,
            "--help" | "-h" => {
                print_usage(program_name);
                return Ok(());
            }
            other if other.starts_with('-') => {
                eprintln!("Error: Unknown option '{}'", other);
                eprintln!();
                print_usage(program_name);
                std::process::exit(1);
            }
            other => {
                if input.is_some() {
                    eprintln!("Error: More than one input string given");
                    eprintln!();
                    print_usage(program_name);
                    std::process::exit(1);
                }
                input = Some(other.to_string());
            }
        }
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(input, mode);
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
