fn main() -> anyhow::Result<()> {
    release_herald::logger::init()?;
    release_herald::cli::main()
}
