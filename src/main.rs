use spinning_sphere as sphere;
use clap::Parser;

fn main() {
    // Read the configuration from the command line
    let config = sphere::config::Config::parse();

    // Run the application
    pollster::block_on(sphere::application::run(config));
}
