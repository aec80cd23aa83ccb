mod runner_bootstrap;
mod runner_run;
