// heapviz: step-through max-heap and heap sort visualizer

use std::io;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use heapviz::config::{clamp_speed, initial_people, people_from_weights, AnimationConfig, Cli};
use heapviz::heap::Person;
use heapviz::logging;
use heapviz::ui::App;
use heapviz::validation::parse_weight;
use heapviz::visualizer::Visualizer;

/// Starting data set from the command line, validated like interactive input
fn starting_people(cli: &Cli) -> Result<Vec<Person>, String> {
    if cli.empty {
        return Ok(Vec::new());
    }
    let Some(raw) = &cli.weights else {
        return Ok(initial_people());
    };

    let weights = raw
        .iter()
        .map(|w| parse_weight(w).map_err(|e| format!("Invalid weight '{}': {}", w, e)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(people_from_weights(&weights))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let people = match starting_people(&cli) {
        Ok(people) => people,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = logging::init(&cli.log_file, &cli.log_level) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let speed = clamp_speed(cli.speed);
    tracing::info!(people = people.len(), speed, "starting heapviz");
    let visualizer = Visualizer::new(people, AnimationConfig::default(), speed);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(visualizer, cli.export_dir);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "ui loop failed");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
