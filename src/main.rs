fn main() -> anyhow::Result<()> {
    tenpin_rust::run()
}
