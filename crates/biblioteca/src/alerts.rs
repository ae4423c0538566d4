//! User-facing notifications: success lines, error banners and the
//! distinct out-of-stock dialog.

use colored::Colorize;

use crate::prelude::{eprintln, println, *};

pub fn show_success(message: &str) {
    println!("{} {}", "✔".green().bold(), message.green());
}

/// Render the notification for a failure.
///
/// Stock exhaustion gets its own boxed dialog so it is never mistaken for
/// a transport or server problem; network failures add the hint the
/// original UI showed when the backend was down.
pub fn show_error(err: &Error) {
    match err {
        Error::OutOfStock(message) => {
            eprintln!("\n{}", "=".repeat(60).red());
            eprintln!("{}", "SIN STOCK DISPONIBLE".red().bold());
            eprintln!("{}", "=".repeat(60).red());
            eprintln!("{message}\n");
        }
        Error::Network(_) => {
            eprintln!("{} {}", "✘".red().bold(), err.to_string().red());
            eprintln!(
                "{}",
                "Asegúrate que la API esté corriendo y que la URL base sea correcta."
                    .bright_black()
            );
        }
        other => {
            eprintln!("{} {}", "✘".red().bold(), other.to_string().red());
        }
    }
}

/// Print the notification for a failure and terminate with a nonzero exit.
pub fn abort(err: &Error) -> ! {
    show_error(err);
    std::process::exit(1);
}

/// Yes/no prompt on the terminal. Anything but an explicit yes declines,
/// including a read failure.
pub fn confirm(prompt: &str) -> bool {
    use std::io::Write;

    std::print!("{prompt} ");
    let _ = std::io::stdout().flush();

    let mut answer = String::new();
    if std::io::stdin().read_line(&mut answer).is_err() {
        return false;
    }

    matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "si" | "sí" | "y" | "yes"
    )
}
