use crate::domain::batch::UnknownStatus;
use crate::domain::{
    coerce_quantity, price, validate, BatchRecord, BatchStatus, FieldErrors, OrderInput,
    OrderMessage, PricingResult,
};
use crate::errors::ServerError;
use crate::responses::{
    html_response, html_response_with_status, redirect, text_asset, ResultResp,
};
use crate::state::AppState;
use crate::store::Saved;
use crate::templates::pages::{self, AdminNotice, OrderVm};
use astra::Request;
use std::collections::HashMap;
use std::io::Read;
use tracing::{debug, info, warn};
use url::form_urlencoded;

const MAX_FORM_BYTES: u64 = 64 * 1024;

const MAIN_CSS: &str = include_str!("../static/main.css");

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(pages::home_page(&state.batch.get())),
        ("GET", "/batch-tracker") => html_response(pages::batch_tracker_page(&state.batch.get())),

        ("GET", "/admin") => {
            let notice = match parse_query(&req).get("saved").map(String::as_str) {
                Some("1") => Some(AdminNotice::Saved),
                Some("0") => Some(AdminNotice::SavedNotDurable),
                _ => None,
            };
            html_response(pages::admin_page(&state.batch.get(), notice))
        }
        ("POST", "/admin") => {
            let form = parse_form(req)?;
            let record = record_from_form(&form)?;

            match state.batch.update(record) {
                Saved::Persisted => redirect("/admin?saved=1"),
                Saved::NotPersisted(e) => {
                    warn!(error = %e, "admin edit kept in memory only");
                    redirect("/admin?saved=0")
                }
            }
        }

        // "Hitung harga" resubmits the form here as a GET to refresh the quote.
        ("GET", "/order") => {
            let mut query = parse_query(&req);
            let input = OrderInput {
                name: query.remove("name").unwrap_or_default(),
                address: query.remove("address").unwrap_or_default(),
                quantity: coerce_quantity(query.get("quantity").map_or("", String::as_str)),
            };
            let quote = quote_for(input.quantity);
            html_response(pages::order_page(&OrderVm {
                input,
                errors: FieldErrors::default(),
                quote,
            }))
        }
        ("POST", "/order") => {
            let mut form = parse_form(req)?;
            let input = OrderInput {
                name: form.remove("name").unwrap_or_default(),
                address: form.remove("address").unwrap_or_default(),
                quantity: coerce_quantity(form.get("quantity").map_or("", String::as_str)),
            };

            match validate(&input) {
                Ok(order) => {
                    let pricing = price(order.quantity);
                    let message = OrderMessage::compose(&order, &pricing);
                    info!(
                        quantity = order.quantity,
                        total = pricing.total_price,
                        "order handed off to chat"
                    );
                    redirect(&message.whatsapp_link(&state.whatsapp_phone))
                }
                Err(errors) => {
                    debug!(
                        fields = ?errors.iter().map(|(f, _)| f.as_str()).collect::<Vec<_>>(),
                        "order form rejected"
                    );
                    let quote = quote_for(input.quantity);
                    html_response_with_status(
                        422,
                        pages::order_page(&OrderVm {
                            input,
                            errors,
                            quote,
                        }),
                    )
                }
            }
        }

        ("GET", "/static/main.css") => text_asset(mime::TEXT_CSS_UTF_8, MAIN_CSS),

        _ => Err(ServerError::NotFound),
    }
}

/// Price preview for quantities the order form would accept.
fn quote_for(quantity: i64) -> Option<PricingResult> {
    let candidate = OrderInput {
        name: "-".into(),
        address: "-".into(),
        quantity,
    };
    validate(&candidate).ok().map(|order| price(order.quantity))
}

/// Build a full record from the admin form. Every field must be present;
/// there is no partial update.
fn record_from_form(form: &HashMap<String, String>) -> Result<BatchRecord, ServerError> {
    let field = |name: &str| {
        form.get(name)
            .cloned()
            .ok_or_else(|| ServerError::BadRequest(format!("missing field {name}")))
    };

    let status = field("status")?
        .parse::<BatchStatus>()
        .map_err(|e: UnknownStatus| ServerError::BadRequest(e.to_string()))?;

    Ok(BatchRecord {
        batch_code: field("batchCode")?,
        fermentation_started: field("fermentationStarted")?,
        harvest_date: field("harvestDate")?,
        best_before: field("bestBefore")?,
        status,
    })
}

fn parse_form(req: Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = Vec::new();
    req.into_body()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;

    if body.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest(format!(
            "form body larger than {MAX_FORM_BYTES} bytes"
        )));
    }

    Ok(form_urlencoded::parse(&body).into_owned().collect())
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
