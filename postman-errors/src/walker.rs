use crate::{
    collection::{Collection, Item, RecordedResponse, Request},
    configuration::{ConversionOptions, MalformedBodyPolicy},
    error::Error,
    errors_document::{ErrorGroup, ErrorHeader, ErrorRequest, ErrorResponse},
    url::normalize_url,
    variables::resolve_variables,
};
use tracing::{debug, warn};

/// Walks the collection tree depth-first, in document order, and returns one error group per
/// request that recorded at least one error response.
pub fn collect_error_groups(
    collection: &Collection,
    options: &ConversionOptions,
) -> Result<Vec<ErrorGroup>, Error> {
    let mut groups = Vec::new();
    let mut pending = vec![collection.item.iter()];

    while let Some(items) = pending.last_mut() {
        let item = match items.next() {
            Some(item) => item,
            None => {
                pending.pop();
                continue;
            }
        };

        match item {
            Item::Folder(folder) => {
                debug!("Processing folder {}...", folder.name);
                pending.push(folder.item.iter());
            }
            Item::Request(request) => {
                debug!("Processing item {}...", request.name);
                if let Some(group) = extract_error_group(collection, request, options)? {
                    groups.push(group);
                }
            }
        }
    }

    Ok(groups)
}

pub fn extract_error_group(
    collection: &Collection,
    request: &Request,
    options: &ConversionOptions,
) -> Result<Option<ErrorGroup>, Error> {
    let error_responses = request
        .response
        .iter()
        .filter_map(|response| response.error_code().map(|code| (code, response)))
        .collect::<Vec<_>>();

    if error_responses.is_empty() {
        debug!("No error responses found for {}", request.name);
        return Ok(None);
    }
    debug!(
        "Found {} error responses for {}",
        error_responses.len(),
        request.name
    );

    let mut responses = Vec::with_capacity(error_responses.len());
    for (status_code, response) in error_responses {
        match to_error_response(request, status_code, response) {
            Ok(response) => responses.push(response),
            Err(e) if options.malformed_body_policy() == MalformedBodyPolicy::Skip => {
                warn!("Skipping response: {}", e);
            }
            Err(e) => return Err(e),
        }
    }

    if responses.is_empty() {
        return Ok(None);
    }

    let url = normalize_url(&resolve_variables(collection, request.request.url.raw()));

    Ok(Some(ErrorGroup {
        request: ErrorRequest {
            url,
            method: request.request.method.clone(),
        },
        responses,
    }))
}

fn to_error_response(
    request: &Request,
    status_code: u16,
    response: &RecordedResponse,
) -> Result<ErrorResponse, Error> {
    let body = serde_json::from_str(&response.body).map_err(|source| Error::InvalidResponseBody {
        request: request.name.clone(),
        status_code,
        source,
    })?;

    let headers = response.header.as_ref().map(|headers| {
        headers
            .iter()
            .map(|header| ErrorHeader {
                name: header.key.clone(),
                value: header.value.clone(),
            })
            .collect()
    });

    Ok(ErrorResponse {
        status_code,
        body,
        headers,
    })
}
