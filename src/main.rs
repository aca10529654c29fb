fn main() -> anyhow::Result<()> {
    study_planner_lib::run()?;
    Ok(())
}
