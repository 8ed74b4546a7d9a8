//! WebAssembly bindings for browser embedding.
//!
//! `ProblemIndex` holds the corpus on the Rust side. JavaScript calls
//! `search(options)` on every keystroke or filter change and gets back plain
//! objects shaped like the corpus JSON (`ps_id`, `title`, ...), so existing
//! front-end components render them unchanged.

use crate::pipeline::SearchRequest;
use crate::sort::SortMode;
use crate::store::RecordStore;
use crate::types::ProblemStatement;
use serde::{Deserialize, Serialize};
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;

/// Search options passed from JavaScript. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    pub query: String,
    pub tags: Vec<String>,
    pub min_submissions: Option<u32>,
    pub max_submissions: Option<u32>,
    pub sort: SortMode,
    /// Maximum number of results (default: all)
    pub limit: Option<usize>,
}

impl SearchOptions {
    fn to_request(&self) -> SearchRequest {
        let mut request = SearchRequest::new(self.query.clone())
            .with_tags(self.tags.iter().cloned())
            .sorted_by(self.sort);
        if self.min_submissions.is_some() || self.max_submissions.is_some() {
            let min = self.min_submissions.unwrap_or(0);
            let max = self.max_submissions.unwrap_or(u32::MAX);
            request = request.with_submissions(min..=max);
        }
        request
    }
}

/// Plain objects and arrays, never JS `Map`s.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// WASM-accessible problem statement corpus.
#[wasm_bindgen]
pub struct ProblemIndex {
    store: RecordStore,
}

#[wasm_bindgen]
impl ProblemIndex {
    /// Build from an array of problem statement objects.
    #[wasm_bindgen(constructor)]
    pub fn new(records: JsValue) -> Result<ProblemIndex, JsValue> {
        let records: Vec<ProblemStatement> = from_value(records).map_err(|e| e.to_string())?;
        Ok(ProblemIndex {
            store: RecordStore::new(records),
        })
    }

    /// Build from the raw corpus JSON text.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<ProblemIndex, JsValue> {
        let store = RecordStore::from_json_str(json).map_err(|e| e.to_string())?;
        Ok(ProblemIndex { store })
    }

    /// Number of records.
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.store.len()
    }

    /// Run the full pipeline. `options` may be `undefined`.
    pub fn search(&self, options: JsValue) -> Result<JsValue, JsValue> {
        let options: SearchOptions = if options.is_undefined() || options.is_null() {
            SearchOptions::default()
        } else {
            from_value(options).map_err(|e| e.to_string())?
        };
        let results = self.store.run(&options.to_request());
        let limit = options.limit.unwrap_or(results.len());
        let shown: Vec<&ProblemStatement> = results.into_iter().take(limit).collect();
        to_js(&shown)
    }

    /// The facet catalog as `{ label: values[] }`, in display order.
    pub fn catalog(&self) -> Result<JsValue, JsValue> {
        to_js(&self.store.catalog())
    }

    /// `[min, max]` submission counts, or `null` for an empty corpus.
    #[wasm_bindgen(js_name = submissionBounds)]
    pub fn submission_bounds(&self) -> Result<JsValue, JsValue> {
        to_js(&self.store.submission_bounds())
    }
}
