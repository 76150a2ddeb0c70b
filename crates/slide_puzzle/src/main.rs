fn main() -> anyhow::Result<()> {
    slide_puzzle::run(slide_puzzle::PuzzleConfig::default())
}
