use clap::Args;
use rent_split::billing::{
    split, validate, BatchImporter, BatchOutcome, BatchReport, BillField, BillInput, RawBillForm,
    SplitView, ValidationErrors,
};
use rent_split::config::AppConfig;
use rent_split::error::AppError;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit status for a submission the validator rejected.
pub(crate) const EXIT_INVALID_FORM: u8 = 2;

#[derive(Args, Debug, Default)]
pub(crate) struct SplitArgs {
    /// Number of people splitting the costs (1-4). Defaults to the configured seed.
    #[arg(long)]
    pub(crate) person: Option<String>,
    /// Days of the 30-day month the place was used (1-30). Defaults to the configured seed.
    #[arg(long)]
    pub(crate) days: Option<String>,
    /// Monthly rent. Defaults to the configured seed.
    #[arg(long)]
    pub(crate) rent: Option<String>,
    /// Water bill for the period
    #[arg(long)]
    pub(crate) water_bill: Option<String>,
    /// Energy bill for the period
    #[arg(long)]
    pub(crate) energy_bill: Option<String>,
    /// Internet bill for the period
    #[arg(long)]
    pub(crate) internet_bill: Option<String>,
    /// Any other shared expense
    #[arg(long)]
    pub(crate) others: Option<String>,
    /// Print the result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl SplitArgs {
    fn into_form(self, mut form: RawBillForm) -> (RawBillForm, bool) {
        let overrides = [
            (BillField::Person, self.person),
            (BillField::Days, self.days),
            (BillField::Rent, self.rent),
            (BillField::WaterBill, self.water_bill),
            (BillField::EnergyBill, self.energy_bill),
            (BillField::InternetBill, self.internet_bill),
            (BillField::Others, self.others),
        ];
        for (field, value) in overrides
            .into_iter()
            .filter_map(|(field, value)| value.map(|value| (field, value)))
        {
            form.insert(field, value);
        }
        (form, self.json)
    }
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV spreadsheet with one form per row, headed by field names
    pub(crate) csv: PathBuf,
    /// Print the report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_split(args: SplitArgs) -> Result<ExitCode, AppError> {
    let config = AppConfig::load()?;
    let (form, json) = args.into_form(config.form.to_form());

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let accepted = split_form(&form, json, &mut stdout.lock(), &mut stderr.lock())?;
    Ok(exit_code(accepted))
}

pub(crate) fn exit_code(accepted: bool) -> ExitCode {
    if accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_INVALID_FORM)
    }
}

/// Prints the split to `out`, or the field errors to `err`, and reports whether the form was
/// accepted. JSON output always goes to `out`.
pub(crate) fn split_form<O: Write, E: Write>(
    form: &RawBillForm,
    json: bool,
    out: &mut O,
    err: &mut E,
) -> Result<bool, AppError> {
    match validate(form) {
        Ok(input) => {
            let view = SplitView::from(&split(&input));
            if json {
                let rendered = serde_json::to_string_pretty(&view).map_err(std::io::Error::from)?;
                writeln!(out, "{rendered}")?;
            } else {
                render_split(out, &input, &view)?;
            }
            Ok(true)
        }
        Err(errors) => {
            if json {
                let payload = serde_json::json!({ "errors": errors });
                let rendered =
                    serde_json::to_string_pretty(&payload).map_err(std::io::Error::from)?;
                writeln!(out, "{rendered}")?;
            } else {
                render_errors(err, &errors)?;
            }
            Ok(false)
        }
    }
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<ExitCode, AppError> {
    let report = BatchImporter::from_path(&args.csv)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.json {
        let rendered = serde_json::to_string_pretty(&report).map_err(std::io::Error::from)?;
        writeln!(out, "{rendered}")?;
    } else {
        render_batch(&mut out, &report)?;
    }

    Ok(ExitCode::SUCCESS)
}

pub(crate) fn render_split<W: Write>(
    out: &mut W,
    input: &BillInput,
    view: &SplitView,
) -> std::io::Result<()> {
    writeln!(
        out,
        "Dividindo por {} pessoa(s), {} de 30 dias",
        input.person(),
        input.days()
    )?;
    writeln!(out, "Aluguel por pessoa: {}", view.formatted.rent_share)?;
    writeln!(out, "Contas por pessoa: {}", view.formatted.bills_share)?;
    writeln!(out, "Total por pessoa: {}", view.formatted.total_share)
}

pub(crate) fn render_errors<W: Write>(out: &mut W, errors: &ValidationErrors) -> std::io::Result<()> {
    for error in errors.iter() {
        writeln!(out, "- {}: {}", error.field.label(), error.message)?;
    }
    Ok(())
}

fn render_batch<W: Write>(out: &mut W, report: &BatchReport) -> std::io::Result<()> {
    writeln!(
        out,
        "{} linha(s): {} calculada(s), {} com erro",
        report.entries.len(),
        report.split_count(),
        report.rejected_count()
    )?;

    for entry in &report.entries {
        let label = entry
            .label
            .clone()
            .unwrap_or_else(|| format!("linha {}", entry.row));
        match &entry.outcome {
            BatchOutcome::Split(view) => writeln!(
                out,
                "- {label}: aluguel {}, contas {}, total {}",
                view.formatted.rent_share, view.formatted.bills_share, view.formatted.total_share
            )?,
            BatchOutcome::Rejected { errors } => {
                writeln!(out, "- {label}: erro")?;
                for error in errors.iter() {
                    writeln!(out, "    {}: {}", error.field.label(), error.message)?;
                }
            }
        }
    }

    Ok(())
}
