use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError, SolverPlugin,
    SolverRegistry,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 24)]
struct PluginSolver;

impl AocParser for PluginSolver {
    type SharedData<'a> = Vec<u64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .split(',')
            .map(|w| {
                w.trim()
                    .parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("bad number {w:?}")))
            })
            .collect()
    }
}

impl PartSolver<1> for PluginSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<u64>().to_string())
    }
}

impl PartSolver<2> for PluginSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().max().copied().unwrap_or_default().to_string())
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2015, day = 25)]
struct GreetingSolver;

impl AocParser for GreetingSolver {
    type SharedData<'a> = ();

    fn parse(_: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl PartSolver<1> for GreetingSolver {
    fn solve(_: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok("merry".to_string())
    }
}

#[test]
fn test_plugins_are_collected() {
    let registry = SolverRegistry::with_plugins().expect("no duplicate plugins");

    assert!(registry.contains(2015, 24));
    assert!(registry.contains(2015, 25));

    let mut solver = registry.create(2015, 24, "3, 9, 4").unwrap();
    assert_eq!(solver.parts(), 2);
    assert_eq!(solver.solve(1).unwrap().value, "16");
    assert_eq!(solver.solve(2).unwrap().value, "9");

    let mut greeting = registry.create(2015, 25, "").unwrap();
    assert_eq!(greeting.solve(1).unwrap().value, "merry");
}

#[test]
fn test_plugin_registers_its_own_type() {
    let plugin = aoc_solver::inventory::iter::<SolverPlugin>
        .into_iter()
        .find(|p| (p.year, p.day) == (2015, 24))
        .expect("plugin submitted");

    // The plugin can place its solver under any date
    let mut registry = SolverRegistry::new();
    (plugin.register)(&mut registry, 2016, 3).unwrap();
    assert!(registry.contains(2016, 3));
    assert!(!registry.contains(2015, 24));
    assert!((plugin.register)(&mut registry, 2016, 3).is_err());
}
