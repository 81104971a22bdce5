#![forbid(unsafe_code)]

use std::io::{self, Read};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use brandkit_core::profile::{build_profile, Answers, QuickAnswers};
use brandkit_engine::quick::render_quick;
use brandkit_engine::resolve::resolve_strategy;
use brandkit_engine::session::Session;

#[derive(Parser)]
#[command(
    name = "bk",
    version,
    about = "SNS branding strategy generator. Unix-friendly: JSON in, text out."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Generate the full branding guide from an answers JSON.
    Guide {
        /// Path to answers .json (or "-" / omit for stdin).
        #[arg(default_value = "-")]
        file: String,

        /// Write to file instead of stdout.
        #[arg(short, long)]
        output: Option<String>,

        /// Write to brand-guide-<profile id>.txt in the current directory.
        #[arg(long)]
        save: bool,

        /// Include only these sections (comma-separated).
        #[arg(long, value_delimiter = ',')]
        sections: Vec<String>,
    },

    /// Validate answers and print the assembled profile JSON.
    Profile {
        /// Path to answers .json (or "-" / omit for stdin).
        #[arg(default_value = "-")]
        file: String,
    },

    /// Show the strategy the answers resolve to.
    Strategy {
        /// Path to answers .json (or "-" / omit for stdin).
        #[arg(default_value = "-")]
        file: String,

        /// Output JSON instead of a summary.
        #[arg(long)]
        json: bool,
    },

    /// Show the 12-week plan for the answers.
    Plan {
        /// Path to answers .json (or "-" / omit for stdin).
        #[arg(default_value = "-")]
        file: String,

        /// Output JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Validate answers files against the answers schema.
    Validate {
        /// One or more .json file paths.
        #[arg(required = true)]
        files: Vec<String>,
    },

    /// Check answers files: schema, required fields, lints.
    Check {
        /// One or more .json file paths.
        #[arg(required = true)]
        files: Vec<String>,

        /// Output structured JSON reports.
        #[arg(long)]
        json: bool,

        /// Fail on warnings (not just errors).
        #[arg(long)]
        strict: bool,
    },

    /// List the strategy catalog.
    Strategies,

    /// List the intake question set.
    Fields {
        /// Show the quick variant's seven questions instead.
        #[arg(long)]
        quick: bool,
    },

    /// Quick variant: seven raw answers, one-shot branding text.
    Quick {
        /// Path to quick-answers .json (or "-" / omit for stdin).
        #[arg(default_value = "-")]
        file: String,

        /// Seed for the cosmetic picks (deterministic output).
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Write a starter answers file.
    Init {
        /// Write the quick variant's starter file instead.
        #[arg(long)]
        quick: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Cmd::Guide {
            file,
            output,
            save,
            sections,
        } => cmd_guide(&file, output.as_deref(), save, &sections),

        Cmd::Profile { file } => cmd_profile(&file),

        Cmd::Strategy { file, json } => cmd_strategy(&file, json),

        Cmd::Plan { file, json } => cmd_plan(&file, json),

        Cmd::Validate { files } => cmd_validate(&files),

        Cmd::Check { files, json, strict } => cmd_check(&files, json, strict),

        Cmd::Strategies => cmd_strategies(),

        Cmd::Fields { quick } => cmd_fields(quick),

        Cmd::Quick { file, seed } => cmd_quick(&file, seed),

        Cmd::Init { quick } => cmd_init(quick),
    }
}

// ── Input helpers ───────────────────────────────────────────────

fn read_text(file: &str) -> Result<String> {
    if file == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(file).with_context(|| format!("cannot read {file}"))
    }
}

fn read_answers(file: &str) -> Result<Answers> {
    let content = read_text(file)?;
    serde_json::from_str(&content).with_context(|| format!("{file}: invalid answers JSON"))
}

fn read_quick_answers(file: &str) -> Result<QuickAnswers> {
    let content = read_text(file)?;
    serde_json::from_str(&content).with_context(|| format!("{file}: invalid answers JSON"))
}

// ── Commands ────────────────────────────────────────────────────

fn cmd_guide(file: &str, output: Option<&str>, save: bool, sections: &[String]) -> Result<()> {
    let answers = read_answers(file)?;
    let mut session = Session::new();
    session.submit(&answers)?;
    let guide = session.render(sections)?;

    if let Some(path) = output {
        std::fs::write(path, &guide).with_context(|| format!("cannot write {path}"))?;
        eprintln!("wrote {path}");
    } else if save {
        let id = session.profile().map(|p| p.id.to_string()).unwrap_or_default();
        let path = format!("brand-guide-{id}.txt");
        std::fs::write(&path, &guide).with_context(|| format!("cannot write {path}"))?;
        eprintln!("wrote {path}");
    } else {
        print!("{guide}");
    }
    Ok(())
}

fn cmd_profile(file: &str) -> Result<()> {
    let answers = read_answers(file)?;
    let profile = build_profile(&answers)?;
    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
}

fn cmd_strategy(file: &str, json_out: bool) -> Result<()> {
    let answers = read_answers(file)?;
    let profile = build_profile(&answers)?;
    let template = resolve_strategy(&profile);

    if json_out {
        println!("{}", serde_json::to_string_pretty(&template.as_json())?);
    } else {
        println!("  key:       {}", template.key);
        println!("  brand:     {}", template.brand_type);
        println!("  strategy:  {}", template.strategy_name);
        println!("  pillars:   {}", template.content_pillars.join(" / "));
        println!("  kpi focus: {}", template.kpi_focus());
    }
    Ok(())
}

fn cmd_plan(file: &str, json_out: bool) -> Result<()> {
    let answers = read_answers(file)?;
    let profile = build_profile(&answers)?;
    let template = resolve_strategy(&profile);
    let plans = brandkit_engine::plan::generate_weekly_plans(&profile, template);

    if json_out {
        println!("{}", serde_json::to_string_pretty(&plans)?);
    } else {
        for plan in &plans {
            println!("{:>2}주차 [{}] KPI: {}", plan.week, plan.phase, plan.kpi_focus);
            for task in &plan.tasks {
                println!("     - {task}");
            }
        }
    }
    Ok(())
}

fn cmd_validate(files: &[String]) -> Result<()> {
    let (passed, failed) = brandkit_core::schema::validate_files(files)?;
    eprintln!("\n{passed} passed, {failed} failed");
    if failed > 0 {
        bail!("{failed} file(s) failed validation");
    }
    Ok(())
}

fn cmd_check(files: &[String], json_out: bool, strict: bool) -> Result<()> {
    let mut reports = Vec::new();
    let mut failed = 0usize;

    for file in files {
        let content = std::fs::read_to_string(file)
            .map_err(|e| anyhow::anyhow!("cannot read {file}: {e}"))?;
        let data: serde_json::Value = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("{file}: invalid JSON: {e}"))?;

        let report = brandkit_core::schema::check(&data, file, strict);

        if !json_out {
            if report.pass {
                eprintln!("  ok  {file}");
            } else {
                eprintln!("  FAIL {file}");
            }
            for e in &report.errors {
                eprintln!(
                    "  error {}: {} {}",
                    e.code,
                    e.message,
                    e.path.as_deref().unwrap_or("")
                );
            }
            for w in &report.warnings {
                eprintln!(
                    "  warn  {}: {} {}",
                    w.code,
                    w.message,
                    w.path.as_deref().unwrap_or("")
                );
            }
        }

        if !report.pass {
            failed += 1;
        }
        reports.push(report);
    }

    if json_out {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    if failed > 0 {
        bail!("check failed for {failed} file(s)");
    }
    Ok(())
}

fn cmd_strategies() -> Result<()> {
    for (key, brand_type) in brandkit_core::strategy::list_strategies() {
        println!("  {key:<22} {brand_type}");
    }
    Ok(())
}

fn cmd_fields(quick: bool) -> Result<()> {
    let questions = if quick {
        brandkit_core::questions::quick_questions()
    } else {
        brandkit_core::questions::intake_questions()
    };
    for q in questions {
        let flag = if q.required { "required" } else { "optional" };
        println!("  {:<18} {flag:<9} {}  [{}]", q.field, q.prompt, q.kind.describe());
    }
    Ok(())
}

fn cmd_quick(file: &str, seed: Option<u64>) -> Result<()> {
    let answers = read_quick_answers(file)?;
    answers.validate()?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    print!("{}", render_quick(&answers, &mut rng));
    Ok(())
}

fn cmd_init(quick: bool) -> Result<()> {
    if quick {
        let starter = serde_json::json!({
            "mission": "선배로서 코칭",
            "passion": "뉴스킨 제품",
            "expertise": "출산 후 자기관리",
            "values": "신뢰",
            "target": "30-40대 여성",
            "pain": "뱃살",
            "gain": "자신감 회복"
        });
        let json = serde_json::to_string_pretty(&starter)?;
        std::fs::write("quick-answers.json", &json)?;
        eprintln!("created quick-answers.json (edit to customize)");
    } else {
        let starter = serde_json::json!({
            "business_stage": "launch",
            "business_type": "product",
            "target_age_group": "thirties",
            "brand_archetype": "sage",
            "primary_goals": ["awareness"],
            "tone": { "friendliness": 4, "expertise": 4, "humor": 2 },
            "competitors": [],
            "differentiation": ""
        });
        let json = serde_json::to_string_pretty(&starter)?;
        std::fs::write("answers.json", &json)?;
        eprintln!("created answers.json (edit to customize)");
    }
    Ok(())
}
