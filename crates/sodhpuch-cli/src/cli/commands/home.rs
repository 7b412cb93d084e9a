//! Home page command.

use sodhpuch_core::pages::home::HomePage;

pub fn show() {
    let page = HomePage;
    println!("{}", page.title());
    println!("{}", page.tagline());
    println!();
    for line in page.intro() {
        println!("{line}");
    }
    println!();
    println!("Pages:");
    for route in page.links() {
        println!("  {:<12} {}", route.path(), route.title());
    }
}
