//! Command handlers. Each writes its result to `out` and returns errors for
//! `main` to print.

pub mod admin;
pub mod payment;
pub mod student;

use crate::cli::{AdminCommand, Command};
use crate::context::AppContext;
use crate::error::FywError;

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub async fn dispatch<R, W>(
    ctx: &mut AppContext,
    command: Command,
    input: R,
    out: &mut W,
) -> Result<(), FywError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    match command {
        Command::Packages { json } => student::packages(ctx, json, out).await,
        Command::Register(args) => student::register(ctx, args, out).await,
        Command::Login { matric_number } => student::login(ctx, &matric_number, out).await,
        Command::Logout => student::logout(ctx, out),
        Command::Status { matric_number } => {
            student::status(ctx, matric_number.as_deref(), out).await
        }
        Command::Pay(args) => payment::pay(ctx, args, out).await,
        Command::Verify { reference } => payment::verify(ctx, &reference, out).await,
        Command::Admin { command } => match command {
            AdminCommand::Login { email, password } => {
                admin::login(ctx, &email, password, input, out).await
            }
            AdminCommand::Logout => admin::logout(ctx, out),
            AdminCommand::Students(args) => admin::students(ctx, args, out).await,
            AdminCommand::Search(filters) => admin::search(ctx, filters, input, out).await,
        },
    }
}

pub(crate) fn emit(out: &mut impl Write, text: &str) -> Result<(), FywError> {
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| FywError::fyw(format!("Failed to write output: {e}")))
}

pub(crate) async fn read_line<R: AsyncBufRead + Unpin>(input: &mut R) -> Result<String, FywError> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .await
        .map_err(|e| FywError::fyw(format!("Failed to read input: {e}")))?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
