fn main() -> anyhow::Result<()> {
    gaitmat_lib::run()
}
