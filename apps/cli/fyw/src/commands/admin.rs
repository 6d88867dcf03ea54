use super::{emit, read_line};

use crate::cli::{FilterArgs, StudentsArgs};
use crate::context::AppContext;
use crate::error::FywError;
use crate::output;

use common::RedactedToken;
use models::StudentsPage;
use portal_core::admin::{AdminLoginForm, PageWindow, StudentQuery, StudentRow, export_file_name, to_csv};
use portal_core::debounce::debounce;

use std::io::Write;

use log::{debug, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub async fn login<R: AsyncBufRead + Unpin>(
    ctx: &mut AppContext,
    email: &str,
    password: Option<String>,
    mut input: R,
    out: &mut impl Write,
) -> Result<(), FywError> {
    let password = match password {
        Some(password) => password,
        None => {
            emit(out, "Password: ")?;
            read_line(&mut input).await?
        }
    };

    let form = AdminLoginForm::new(email.trim(), RedactedToken::new(password));
    form.validate()?;

    let session = ctx.client.admin_login(&form).await?;
    ctx.session.remember_admin(&session)?;

    emit(out, &format!("Signed in as {}.\n", session.admin.email))
}

pub fn logout(ctx: &mut AppContext, out: &mut impl Write) -> Result<(), FywError> {
    ctx.session.forget_admin()?;
    emit(out, "Admin signed out.\n")
}

/// One page of students as a table, JSON, or a CSV file.
pub async fn students(
    ctx: &mut AppContext,
    args: StudentsArgs,
    out: &mut impl Write,
) -> Result<(), FywError> {
    let mut query = base_query(ctx, &args.filters);
    if let Some(search) = &args.search {
        query.set_search(search.as_str());
    }
    query.set_page(args.page);

    let page = fetch_page(ctx, &query).await?;
    let rows: Vec<StudentRow> = page.students.iter().map(StudentRow::from).collect();

    if let Some(dir) = &args.export {
        let path = dir.join(export_file_name());
        std::fs::write(&path, to_csv(&rows))
            .map_err(|e| FywError::fyw(format!("Failed to write {}: {e}", path.display())))?;
        info!("Exported {} students to {}", rows.len(), path.display());
        emit(out, &format!("Exported {} students to {}\n", rows.len(), path.display()))?;
    }

    if args.json {
        let json = serde_json::to_string_pretty(&page.students)
            .map_err(|e| FywError::fyw(format!("Failed to serialize students: {e}")))?;
        return emit(out, &(json + "\n"));
    }

    emit(out, &output::student_table(&rows, window(&query, &page, rows.len())))
}

/// Read search terms line by line and show page 1 for each settled term.
///
/// Lines typed within the debounce delay of each other collapse into one
/// request for the last of them. Ends at end of input or on the first
/// failed request.
pub async fn search<R: AsyncBufRead + Unpin>(
    ctx: &mut AppContext,
    filters: FilterArgs,
    input: R,
    out: &mut impl Write,
) -> Result<(), FywError> {
    // Fail before reading any input when not signed in.
    ctx.admin_token()?;

    let (handle, mut debouncer) = debounce::<String>(ctx.config.search_debounce());
    let base = base_query(ctx, &filters);

    let reader = async move {
        let mut lines = input.lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if !handle.push(line) {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    warn!("Stopped reading search terms: {e}");
                    break;
                }
            }
        }
    };

    let consumer = async {
        while let Some(term) = debouncer.next().await {
            let query = base.clone().with_search(term);
            debug!("Searching students: {:?}", query.to_pairs());

            let page = fetch_page(ctx, &query).await?;
            let rows: Vec<StudentRow> = page.students.iter().map(StudentRow::from).collect();
            emit(out, &output::student_table(&rows, window(&query, &page, rows.len())))?;
        }
        Ok::<(), FywError>(())
    };

    // End of input still lets the consumer flush the last pending term.
    tokio::pin!(consumer);
    tokio::select! {
        result = &mut consumer => result,
        () = reader => consumer.await,
    }
}

fn base_query(ctx: &AppContext, filters: &FilterArgs) -> StudentQuery {
    StudentQuery::new(filters.limit.unwrap_or(ctx.config.admin.page_size))
        .with_status(filters.status)
        .with_package_code(filters.package)
}

/// Fetch with the stored token; a 401 drops the token so the next run asks to sign in.
async fn fetch_page(ctx: &mut AppContext, query: &StudentQuery) -> Result<StudentsPage, FywError> {
    let token = ctx.admin_token()?;

    match ctx.client.list_students(query, Some(&token)).await {
        Ok(page) => Ok(page),
        Err(e) => {
            let err = FywError::from(e);
            if err.is_unauthorized() {
                warn!("Admin token rejected, signing out");
                ctx.session.forget_admin()?;
            }
            Err(err)
        }
    }
}

fn window(query: &StudentQuery, page: &StudentsPage, row_count: usize) -> PageWindow {
    match page.pagination {
        Some(p) => PageWindow::new(p.page, p.limit, p.total),
        None => PageWindow::new(query.page(), query.limit(), row_count as u64),
    }
}
