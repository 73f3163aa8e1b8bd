pub fn greet(name: &str) -> String {
    format!("Hello, {}! Welcome to our Jenkins CI/CD pipeline!", name)
}
