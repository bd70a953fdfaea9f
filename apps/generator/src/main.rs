fn main() -> anyhow::Result<()> {
    finals_generator::run()
}
