use crate::app::App;
use crate::domain::apartment::ApartmentRecord;
use crate::domain::entry::NewEntry;
use crate::domain::filter::{FilterBounds, FilterState};
use crate::errors::ServerError;
use crate::responses::{html_response, redirect_response, text_response, ResultResp};
use crate::spreadsheets::export_apartments_xlsx;
use crate::templates::pages::{dashboard_page, DashboardVm};
use astra::Request;
use log::{debug, info};
use std::io::Read;

const MAIN_CSS: &str = include_str!("../static/main.css");

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    debug!("{method} {path}");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => dashboard(&req, app),
        ("POST", "/entries") => add_entry(&mut req, app),
        ("GET", "/export.xlsx") => export(&req, app),
        ("GET", "/static/main.css") => text_response(MAIN_CSS, mime::TEXT_CSS_UTF_8),
        ("GET", "/health") => text_response("ok", mime::TEXT_PLAIN_UTF_8),
        _ => Err(ServerError::NotFound),
    }
}

/// The whole file is re-read on every request, so appended rows show up
/// on the next page load.
fn load_filtered(
    req: &Request,
    app: &App,
) -> Result<(Vec<ApartmentRecord>, FilterBounds, FilterState), ServerError> {
    let records = app.store.load()?;
    let bounds = FilterBounds::from_records(&records);
    let filters =
        FilterState::from_query(&bounds, req.uri().query()).map_err(ServerError::BadRequest)?;
    Ok((records, bounds, filters))
}

fn dashboard(req: &Request, app: &App) -> ResultResp {
    let (records, bounds, filters) = load_filtered(req, app)?;
    let added = query_flag(req, "added");

    let vm = DashboardVm::new(&records, bounds, filters, app.map.clone(), added);
    html_response(dashboard_page(&vm))
}

fn add_entry(req: &mut Request, app: &App) -> ResultResp {
    let mut body = String::new();
    req.body_mut()
        .reader()
        .read_to_string(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("Unreadable form body: {e}")))?;

    let entry = NewEntry::from_form(url::form_urlencoded::parse(body.as_bytes()).into_owned())
        .map_err(ServerError::BadRequest)?;

    app.store.append(&entry)?;
    info!("New entry: {} ({} -> {})", entry.address, entry.source, entry.target);

    redirect_response("/?added=1")
}

fn export(req: &Request, app: &App) -> ResultResp {
    let (records, _bounds, filters) = load_filtered(req, app)?;
    let filtered = filters.apply(&records);
    export_apartments_xlsx(&filtered)
}

fn query_flag(req: &Request, name: &str) -> bool {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).any(|(k, v)| k == name && v == "1"))
        .unwrap_or(false)
}
