use clap::crate_version;
use tempren::exits::ExitCode;
use tempren::opt::Opts;
use tempren::pipeline::{self, PipelineError};
use tempren::template::builtin;
use tempren::template::registry::Registry;
use tempren::{tempren_error, util};

/// `--version`/`-V` print the bare `MAJOR.MINOR.PATCH` string rather than
/// clap's default `"tempren 0.1.0"`, so this is handled before clap ever
/// sees the arguments.
fn print_bare_version_and_exit_if_requested() {
    if std::env::args().skip(1).any(|arg| arg == "--version" || arg == "-V") {
        println!("{}", crate_version!());
        std::process::exit(ExitCode::Success.into());
    }
}

fn list_tags() {
    let mut registry = Registry::new();
    builtin::register_builtins(&mut registry);
    for (category, name) in registry.list_tags() {
        println!("{} ({})", name, category);
    }
}

fn exit_code_for(err: &PipelineError) -> ExitCode {
    match err {
        PipelineError::Syntax(_) | PipelineError::Bind(_) | PipelineError::Evaluation(_) | PipelineError::Filter(_) => {
            ExitCode::TemplateError
        },
        PipelineError::InputDirMissing(_) => ExitCode::Usage,
        PipelineError::Gather(_) | PipelineError::Rename(_) => ExitCode::FilesystemError,
    }
}

fn main() {
    print_bare_version_and_exit_if_requested();

    let args = Opts::get_args();
    util::initialize_logging(&args);

    if args.list_tags {
        list_tags();
        std::process::exit(ExitCode::Success.into());
    }

    let (template, input_dir) = match (&args.template, &args.input_dir) {
        (Some(template), Some(input_dir)) => (template, input_dir),
        _ => {
            eprintln!("usage: tempren [OPTIONS] <TEMPLATE> <INPUT_DIR>");
            std::process::exit(ExitCode::Usage.into());
        },
    };

    match pipeline::run(&args, template, input_dir) {
        Ok(_summary) => std::process::exit(ExitCode::Success.into()),
        Err(err) => {
            let code = exit_code_for(&err);
            let prefix = match code {
                ExitCode::TemplateError => "Template error",
                ExitCode::FilesystemError => "Filesystem error",
                _ => "Error",
            };
            tempren_error!("{}: {}", prefix, err);
            std::process::exit(code.into());
        },
    }
}

