use super::emit;

use crate::cli::RegisterArgs;
use crate::context::AppContext;
use crate::error::FywError;
use crate::output;

use portal_core::dashboard::Dashboard;
use portal_core::registration::RegistrationForm;
use portal_core::selection::PackageSelection;

use std::io::Write;

use log::{debug, info};

pub async fn packages(ctx: &AppContext, json: bool, out: &mut impl Write) -> Result<(), FywError> {
    let packages = ctx.client.list_packages().await?;

    let text = if json {
        serde_json::to_string_pretty(&packages)
            .map(|s| s + "\n")
            .map_err(|e| FywError::fyw(format!("Failed to serialize packages: {e}")))?
    } else {
        output::packages(&packages)
    };

    emit(out, &text)
}

/// Register, remember the matric number, then show the dashboard.
///
/// A remembered registration goes straight to the dashboard unless `--force`.
pub async fn register(
    ctx: &mut AppContext,
    args: RegisterArgs,
    out: &mut impl Write,
) -> Result<(), FywError> {
    if !args.force {
        if let Some(existing) = ctx.session.matric_number().map(str::to_string) {
            info!("Already registered as {existing}, showing dashboard");
            emit(
                out,
                &format!("Already registered as {existing}. Use --force to register again.\n"),
            )?;
            return status(ctx, Some(&existing), out).await;
        }
    }

    let form = RegistrationForm {
        matric_number: args.matric_number,
        full_name: args.full_name,
        gender: Some(args.gender),
        email: args.email,
    };

    let mut selection = PackageSelection::new(args.package);
    if let Some(day) = args.day {
        selection.days.toggle(day);
    }

    let request = form.identify_request(&selection)?;
    debug!("Registering {} for package {}", request.matric_number, request.package_code);

    let student = ctx.client.identify(&request).await?;
    ctx.session.remember_student(&student.matric_number)?;

    emit(
        out,
        &format!(
            "Registered {} ({}) for {}.\n",
            student.full_name,
            student.matric_number,
            request.package_code.label()
        ),
    )?;

    status(ctx, Some(&student.matric_number), out).await
}

/// Find an existing registration by matric number and remember it.
pub async fn login(
    ctx: &mut AppContext,
    matric_number: &str,
    out: &mut impl Write,
) -> Result<(), FywError> {
    let dashboard = load_dashboard(ctx, matric_number.trim()).await?;
    ctx.session.remember_student(&dashboard.student.matric_number)?;
    emit(out, &output::dashboard(&dashboard))
}

pub fn logout(ctx: &mut AppContext, out: &mut impl Write) -> Result<(), FywError> {
    ctx.session.forget_student()?;
    emit(out, "Signed out.\n")
}

pub async fn status(
    ctx: &AppContext,
    matric_number: Option<&str>,
    out: &mut impl Write,
) -> Result<(), FywError> {
    let matric_number = ctx.resolve_matric(matric_number)?;
    let dashboard = load_dashboard(ctx, &matric_number).await?;
    emit(out, &output::dashboard(&dashboard))
}

pub(crate) async fn load_dashboard(
    ctx: &AppContext,
    matric_number: &str,
) -> Result<Dashboard, FywError> {
    let status = ctx.client.student_status(matric_number).await?;
    Ok(Dashboard::new(
        status,
        ctx.config.dashboard.default_installment,
    ))
}
