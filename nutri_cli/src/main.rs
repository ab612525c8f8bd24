use clap::{Parser, Subcommand};
use nutri_core::*;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "maisvida")]
#[command(about = "Mais Vida nutrition coach", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive coach session (default)
    Coach,

    /// Compute a plan from flags, without the interactive session
    Plan {
        /// Weight in kg
        #[arg(long)]
        weight: String,

        /// Height in cm
        #[arg(long)]
        height: String,

        /// Age in years
        #[arg(long)]
        age: String,

        /// Body fat percentage (collected, not used by the calculation)
        #[arg(long)]
        body_fat: Option<String>,

        /// Sex (male or female)
        #[arg(long)]
        sex: String,

        /// Goal (lose, gain or maintain)
        #[arg(long)]
        goal: String,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    nutri_core::logging::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Some(Commands::Plan {
            weight,
            height,
            age,
            body_fat,
            sex,
            goal,
            json,
        }) => {
            // Numeric flags stay raw strings through the form so malformed
            // values coerce to NaN exactly like the interactive session
            let form = MetricsForm {
                weight,
                height,
                age,
                body_fat: body_fat.unwrap_or_default(),
                sex: Some(parse_sex(&sex)?),
                goal: Some(parse_goal(&goal)?),
            };
            cmd_plan(form, json, &config)
        }
        Some(Commands::Coach) | None => cmd_coach(&config),
    }
}

fn cmd_plan(form: MetricsForm, json_flag: bool, config: &Config) -> Result<()> {
    let metrics = form.to_metrics()?;
    let plan = generate_plan(&metrics);

    if json_flag || config.output.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        display_plan(&plan, config);
    }

    Ok(())
}

fn cmd_coach(config: &Config) -> Result<()> {
    let mut state = CoachState::new();

    loop {
        state = match state {
            CoachState::CollectingInput(mut form) => {
                display_form_header();
                fill_form(&mut form)?;
                println!();
                println!("✓ Gerando plano personalizado...");
                CoachState::CollectingInput(form).submit()
            }
            CoachState::ShowingPlan { form, plan } => {
                display_plan(&plan, config);
                match prompt_after_plan()? {
                    AfterPlan::Recompute => CoachState::ShowingPlan { form, plan }.recompute(),
                    AfterPlan::Exit => break,
                }
            }
        };
    }

    Ok(())
}

fn display_form_header() {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  Coach Nutricional");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Preencha seus dados para receber um plano personalizado");
    println!();
}

/// Prompt every form field in screen order.
///
/// Values already on the form (from a previous pass) are offered as defaults
/// and kept on an empty answer; required fields re-prompt until non-empty.
fn fill_form(form: &mut MetricsForm) -> Result<()> {
    form.weight = prompt_field("Peso (kg) *", &form.weight, true)?;
    form.height = prompt_field("Altura (cm) *", &form.height, true)?;
    form.age = prompt_field("Idade *", &form.age, true)?;
    form.body_fat = prompt_field(
        "Percentual de Gordura (%) - Opcional",
        &form.body_fat,
        false,
    )?;
    form.sex = Some(prompt_sex(form.sex)?);
    form.goal = Some(prompt_goal(form.goal)?);
    Ok(())
}

fn prompt_field(label: &str, current: &str, required: bool) -> Result<String> {
    loop {
        if current.is_empty() {
            print!("{}: ", label);
        } else {
            print!("{} [{}]: ", label, current);
        }
        io::stdout().flush()?;

        match read_trimmed_line()? {
            None => {
                if !current.is_empty() || !required {
                    return Ok(current.to_string());
                }
                return Err(input_closed());
            }
            Some(input) if input.is_empty() => {
                if !current.is_empty() || !required {
                    return Ok(current.to_string());
                }
                println!("  Campo obrigatório.");
            }
            Some(input) => return Ok(input),
        }
    }
}

fn prompt_sex(current: Option<Sex>) -> Result<Sex> {
    loop {
        match current {
            Some(sex) => print!("Sexo * (m/f) [{}]: ", sex.label()),
            None => print!("Sexo * (m/f): "),
        }
        io::stdout().flush()?;

        match read_trimmed_line()? {
            None => {
                return current.ok_or_else(input_closed);
            }
            Some(input) => match input.to_lowercase().as_str() {
                "m" | "masculino" => return Ok(Sex::Male),
                "f" | "feminino" => return Ok(Sex::Female),
                "" => {
                    if let Some(sex) = current {
                        return Ok(sex);
                    }
                    println!("  Campo obrigatório.");
                }
                other => println!("  Opção desconhecida: {}", other),
            },
        }
    }
}

fn prompt_goal(current: Option<Goal>) -> Result<Goal> {
    println!("Qual é seu objetivo? *");
    for (key, goal) in [("1", Goal::Lose), ("2", Goal::Gain), ("3", Goal::Maintain)] {
        println!("  [{}] {} ({})", key, goal.label(), goal.description());
    }

    loop {
        match current {
            Some(goal) => print!("Objetivo [{}]: ", goal.label()),
            None => print!("Objetivo: "),
        }
        io::stdout().flush()?;

        match read_trimmed_line()? {
            None => {
                return current.ok_or_else(input_closed);
            }
            Some(input) => match input.to_lowercase().as_str() {
                "1" | "lose" => return Ok(Goal::Lose),
                "2" | "gain" => return Ok(Goal::Gain),
                "3" | "maintain" => return Ok(Goal::Maintain),
                "" => {
                    if let Some(goal) = current {
                        return Ok(goal);
                    }
                    println!("  Campo obrigatório.");
                }
                other => println!("  Opção desconhecida: {}", other),
            },
        }
    }
}

fn display_plan(plan: &DietPlan, config: &Config) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  Seu Plano Nutricional");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Baseado em cálculos científicos personalizados");
    println!();
    println!("📊 Seus Macronutrientes Diários");
    println!();
    println!("  → Calorias: {} kcal/dia", plan.calories);
    println!("  → Proteína: {}g por dia", plan.protein_g);
    println!("  → Carboidratos: {}g por dia", plan.carbs_g);
    println!("  → Gorduras: {}g por dia", plan.fats_g);

    if config.output.show_meals {
        println!();
        println!("🍽️ Plano de Refeições");
        for meal in &plan.meals {
            println!();
            println!("{}", meal);
        }
    }

    if config.output.show_tips {
        println!();
        println!("💡 Dicas Importantes");
        println!();
        for tip in &plan.tips {
            println!("  {}", tip);
        }
    }

    if config.output.show_disclaimer {
        println!();
        println!(
            "⚠️ Este plano é uma orientação geral baseada em fórmulas científicas. \
             Para um plano personalizado, consulte um nutricionista profissional."
        );
    }

    println!();
}

enum AfterPlan {
    Recompute,
    Exit,
}

fn prompt_after_plan() -> Result<AfterPlan> {
    println!("─────────────────────────────────────────");
    println!("Pressione Enter para sair");
    println!("  'r' + Enter para Refazer Cálculo");
    print!("> ");
    io::stdout().flush()?;

    let action = match read_trimmed_line()? {
        Some(input) if input.eq_ignore_ascii_case("r") => AfterPlan::Recompute,
        _ => AfterPlan::Exit,
    };

    Ok(action)
}

/// Read one line from stdin; `None` on end of input
fn read_trimmed_line() -> Result<Option<String>> {
    let mut input = String::new();
    let bytes = io::stdin().read_line(&mut input)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

fn input_closed() -> Error {
    Error::Other("Input closed before the form was complete".into())
}

fn parse_sex(value: &str) -> Result<Sex> {
    match value.to_lowercase().as_str() {
        "male" | "m" | "masculino" => Ok(Sex::Male),
        "female" | "f" | "feminino" => Ok(Sex::Female),
        other => Err(Error::Other(format!(
            "Unknown sex '{}' (expected male or female)",
            other
        ))),
    }
}

fn parse_goal(value: &str) -> Result<Goal> {
    match value.to_lowercase().as_str() {
        "lose" => Ok(Goal::Lose),
        "gain" => Ok(Goal::Gain),
        "maintain" => Ok(Goal::Maintain),
        other => Err(Error::Other(format!(
            "Unknown goal '{}' (expected lose, gain or maintain)",
            other
        ))),
    }
}
