pub fn run() -> anyhow::Result<()> {
    println!("globalinfo {}", env!("CARGO_PKG_VERSION"));
    println!("Lazily evaluated named values");
    Ok(())
}
