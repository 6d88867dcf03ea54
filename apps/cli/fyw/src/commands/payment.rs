use super::emit;
use super::student::load_dashboard;

use crate::cli::PayArgs;
use crate::context::AppContext;
use crate::error::FywError;
use crate::output;

use portal_core::format::format_naira;
use portal_core::payment::reference_from_input;

use std::io::Write;

use log::info;

/// Start a payment for the current amount, preset, or `--amount`.
pub async fn pay(ctx: &AppContext, args: PayArgs, out: &mut impl Write) -> Result<(), FywError> {
    let matric_number = ctx.resolve_matric(args.matric_number.as_deref())?;
    let mut dashboard = load_dashboard(ctx, &matric_number).await?;

    if let Some(preset) = args.preset {
        dashboard.apply_preset(preset.into());
    }
    if let Some(amount) = args.amount {
        dashboard.set_amount(amount);
        if amount > dashboard.outstanding() {
            emit(
                out,
                &format!(
                    "Amount capped at the outstanding balance of {}.\n",
                    format_naira(dashboard.outstanding())
                ),
            )?;
        }
    }

    let request = dashboard.payment_request()?;
    let checkout = ctx.client.initialize_payment(&request).await?;

    info!("Checkout ready for {matric_number}");
    emit(out, &output::checkout(&checkout, request.amount))
}

/// Verify a payment and show the refreshed dashboard of whoever paid.
pub async fn verify(
    ctx: &mut AppContext,
    reference_input: &str,
    out: &mut impl Write,
) -> Result<(), FywError> {
    let reference = reference_from_input(reference_input)?;
    let outcome = ctx.client.verify_payment(&reference).await?;

    ctx.session.remember_student(&outcome.matric_number)?;
    emit(out, &output::verification(&outcome))?;

    let dashboard = load_dashboard(ctx, &outcome.matric_number).await?;
    emit(out, &output::dashboard(&dashboard))
}
