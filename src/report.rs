// Pass/fail reporting for suite runs

use std::fmt;

// One verification performed during a step
#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    Passed { name: String },
    Failed { name: String, detail: String },
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, CheckOutcome::Passed { .. })
    }
}

// All checks recorded by a single step of the scenario
#[derive(Debug, Clone)]
pub struct StepReport {
    pub step: String,
    pub checks: Vec<CheckOutcome>,
}

impl StepReport {
    pub fn new(step: impl Into<String>) -> Self {
        Self {
            step: step.into(),
            checks: Vec::new(),
        }
    }

    pub fn pass(&mut self, name: impl Into<String>) {
        self.checks.push(CheckOutcome::Passed { name: name.into() });
    }

    pub fn fail(&mut self, name: impl Into<String>, detail: impl Into<String>) {
        self.checks.push(CheckOutcome::Failed {
            name: name.into(),
            detail: detail.into(),
        });
    }

    pub fn passed(&self) -> bool {
        self.checks.iter().all(CheckOutcome::passed)
    }

    pub fn failure_count(&self) -> usize {
        self.checks.iter().filter(|c| !c.passed()).count()
    }
}

// Reports for every step of one suite run, in execution order
#[derive(Debug, Clone, Default)]
pub struct SuiteReport {
    pub steps: Vec<StepReport>,
}

impl SuiteReport {
    pub fn push(&mut self, step: StepReport) {
        self.steps.push(step);
    }

    pub fn passed(&self) -> bool {
        self.steps.iter().all(StepReport::passed)
    }

    pub fn total_checks(&self) -> usize {
        self.steps.iter().map(|s| s.checks.len()).sum()
    }

    pub fn failure_count(&self) -> usize {
        self.steps.iter().map(StepReport::failure_count).sum()
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            let verdict = if step.passed() { "PASS" } else { "FAIL" };
            writeln!(f, "[{verdict}] {}", step.step)?;
            for check in &step.checks {
                match check {
                    CheckOutcome::Passed { name } => writeln!(f, "    ok   {name}")?,
                    CheckOutcome::Failed { name, detail } => {
                        writeln!(f, "    FAIL {name}: {detail}")?
                    }
                }
            }
        }
        write!(
            f,
            "{} checks, {} failed",
            self.total_checks(),
            self.failure_count()
        )
    }
}
