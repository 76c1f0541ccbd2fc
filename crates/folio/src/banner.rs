use colored::Colorize;

pub fn print_banner_with_version() {
    println!(
        "{} {}",
        "folio".bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
    );
    println!("{}", env!("CARGO_PKG_DESCRIPTION").dimmed());
}
