//! PDF Q&A - Model (API functions)

use crate::shared::api_utils::api_url;
use contracts::domain::document_qa::dto::{
    AskQuestionRequest, AskQuestionResponse, UploadPdfResponse,
};

/// Upload the selected PDF as multipart form data.
///
/// Single attempt, no timeout, no cancellation. Transport and non-2xx
/// failures both surface as `Err`; the failure body is not inspected.
pub async fn upload_pdf(file: web_sys::File) -> Result<UploadPdfResponse, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_blob("file", &file)
        .map_err(|e| format!("{e:?}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let url = api_url("/upload_pdf/");
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    let data: UploadPdfResponse = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;

    Ok(data)
}

/// Ask a question about the current document.
///
/// `filename` in the request may be null when no upload has completed;
/// the request is sent regardless and the backend decides.
pub async fn ask_question(req: &AskQuestionRequest) -> Result<AskQuestionResponse, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);

    let dto = serde_json::to_string(req).map_err(|e| format!("{e}"))?;
    let body = wasm_bindgen::JsValue::from_str(&dto);
    opts.set_body(&body);

    let url = api_url("/ask_question/");
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    let data: AskQuestionResponse = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;

    Ok(data)
}
