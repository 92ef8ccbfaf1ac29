use formly::app::{App, contact_form, personal_form};
use formly::form::{Form, Submission};
use formly::terminal::Terminal;
use formly::terminal_event::TerminalEvent;
use std::io;
use std::time::Duration;

fn main() {
    let mut args = std::env::args().skip(1);
    let form = match args.next().as_deref() {
        None => personal_form(),
        Some("contact") => contact_form(),
        Some(other) => {
            eprintln!("Unknown form '{}'; try: formly [contact]", other);
            std::process::exit(2);
        }
    };

    match run(form) {
        Ok(Some(submission)) => report(&submission),
        Ok(None) => {}
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn report(submission: &Submission) {
    println!("Form submitted successfully");
    match submission.to_json_pretty() {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: could not serialize payload: {}", e),
    }
}

fn run(form: Form) -> io::Result<Option<Submission>> {
    let mut terminal = Terminal::new()?;
    terminal.enter_raw_mode()?;
    terminal.set_line_wrap(false)?;
    terminal.hide_cursor()?;

    let result = event_loop(&mut terminal, form);

    terminal.show_cursor()?;
    terminal.set_line_wrap(true)?;
    terminal.exit_raw_mode()?;

    result
}

fn event_loop(terminal: &mut Terminal, form: Form) -> io::Result<Option<Submission>> {
    let mut app = App::new(form);

    let mut render_requested = true;

    loop {
        if terminal.poll(Duration::from_millis(100))? {
            match terminal.read_event()? {
                TerminalEvent::Key(key_event) => {
                    app.handle_key(key_event);
                    render_requested = true;
                }
                TerminalEvent::Resize { .. } => {
                    render_requested = true;
                }
            }
        }

        if app.tick() {
            render_requested = true;
        }

        if render_requested {
            app.render(terminal)?;
            render_requested = false;
        }

        if app.should_exit() {
            break;
        }
    }

    app.renderer.move_to_end(terminal)?;
    terminal.clear_from_cursor_down()?;

    Ok(app.take_submission())
}
