pub fn print_success(message: &str) {
    println!("✅ {message}");
}

pub fn print_info(message: &str) {
    println!("📋 {message}");
}

pub fn print_warning(message: &str) {
    println!("⚠️  {message}");
}
