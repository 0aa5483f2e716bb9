use colored::Colorize;

const HEADER_WIDTH: usize = 60;

pub const VERBOSE_ENV: &str = "MAINT_UPDATE_VERBOSE";

pub fn is_verbose() -> bool {
    std::env::var(VERBOSE_ENV).is_ok()
}

/// Print a banner framed by `fill` characters
pub fn header(title: &str, fill: char) {
    let rule = fill.to_string().repeat(HEADER_WIDTH);
    println!("\n{}", rule.cyan().bold());
    println!("{}", format!("{:^width$}", title, width = HEADER_WIDTH).cyan().bold());
    println!("{}\n", rule.cyan().bold());
}

pub fn section(title: &str) {
    let underline = "─".repeat(title.chars().count() + 2);
    println!("\n{}", format!("▶ {title}").yellow().bold());
    println!("{}", underline.yellow());
}

pub fn success(message: &str) {
    println!("{}", format!("✓ {message}").green());
}

pub fn error(message: &str) {
    eprintln!("{}", format!("✗ {message}").red());
}

pub fn warning(message: &str) {
    println!("{}", format!("⚠ {message}").yellow());
}

pub fn info(message: &str) {
    println!("{}", format!("ℹ {message}").blue());
}

/// Print a progress line such as `[2/5] Updating foo`
pub fn step(current: usize, total: usize, message: &str) {
    println!("{} {message}", format!("[{current}/{total}]").magenta().bold());
}

/// Print a numbered list entry
pub fn item(index: usize, text: &str) {
    println!("  {} {text}", format!("{index}.").cyan());
}

pub fn command(line: &str) {
    println!("  {} {line}", "$".blue());
}

pub fn debug(message: &str) {
    if is_verbose() {
        println!("  {}", message.dimmed());
    }
}
