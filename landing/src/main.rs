// Lumina Landing Page - Leptos 0.8 Edition

fn main() {
    lumina_landing::start();
}
