use colored::Colorize;

pub fn print_header(title: &str) {
    println!();
    println!("{}", format!("=== {} ===", title).bold().cyan());
}

pub fn print_step(msg: &str) {
    println!("  {} {}", "-->".bold().blue(), msg);
}

/// Echo captured child output indented under the failed step.
pub fn print_captured(label: &str, text: &str) {
    let text = text.trim_end();
    if text.is_empty() {
        return;
    }
    println!("  {}:", label.bold().red());
    for line in text.lines() {
        println!("    {}", line.dimmed());
    }
}
