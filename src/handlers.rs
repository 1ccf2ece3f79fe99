use crate::capabilities::{ShareCapability, ShareError, SharePlatform, ShareProbe, ToneSpec};
use crate::errors::AppError;
use crate::models::{
    NameView, NamesResponse, SelectCategoryRequest, SelectFormulaRequest, SetTallyRequest,
    ShareResponse, TasbihResponse, VerseResponse,
};
use crate::names::NameFilter;
use crate::state::AppState;
use crate::tasbih::{CYCLE_LEN, TasbihCounter, UPPER_BOUND};
use crate::ui::{render_index, today_label};
use crate::verses::VerseOfDay;
use axum::{Json, extract::State, response::Html};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let tally = state.tasbih.lock().await.tally();
    Html(render_index(&today_label(), tally))
}

pub async fn get_tasbih(State(state): State<AppState>) -> Result<Json<TasbihResponse>, AppError> {
    let tasbih = state.tasbih.lock().await;
    Ok(Json(tasbih_response(&tasbih, None)))
}

pub async fn tasbih_increment(
    State(state): State<AppState>,
) -> Result<Json<TasbihResponse>, AppError> {
    let mut tasbih = state.tasbih.lock().await;
    let tone = tasbih.increment();
    Ok(Json(tasbih_response(&tasbih, Some(tone))))
}

pub async fn tasbih_reset(State(state): State<AppState>) -> Result<Json<TasbihResponse>, AppError> {
    let mut tasbih = state.tasbih.lock().await;
    let tone = tasbih.reset();
    Ok(Json(tasbih_response(&tasbih, Some(tone))))
}

pub async fn tasbih_set(
    State(state): State<AppState>,
    Json(payload): Json<SetTallyRequest>,
) -> Result<Json<TasbihResponse>, AppError> {
    if payload.position == 0 || payload.position > CYCLE_LEN {
        return Err(AppError::bad_request(format!(
            "position must be between 1 and {CYCLE_LEN}"
        )));
    }

    let mut tasbih = state.tasbih.lock().await;
    tasbih.set_tally(payload.position);
    Ok(Json(tasbih_response(&tasbih, None)))
}

pub async fn tasbih_formula(
    State(state): State<AppState>,
    Json(payload): Json<SelectFormulaRequest>,
) -> Result<Json<TasbihResponse>, AppError> {
    let mut tasbih = state.tasbih.lock().await;
    if payload.index >= tasbih.formulas().len() {
        return Err(AppError::bad_request("unknown formula index"));
    }

    tasbih.select_formula(payload.index);
    Ok(Json(tasbih_response(&tasbih, None)))
}

pub async fn get_verse(State(state): State<AppState>) -> Result<Json<VerseResponse>, AppError> {
    let card = state.verse.lock().await;
    Ok(Json(verse_response(&card)))
}

pub async fn verse_random(State(state): State<AppState>) -> Result<Json<VerseResponse>, AppError> {
    let mut card = state.verse.lock().await;
    card.show_random(&mut rand::rng());
    Ok(Json(verse_response(&card)))
}

pub async fn verse_share(
    State(state): State<AppState>,
    Json(probe): Json<ShareProbe>,
) -> Result<Json<ShareResponse>, AppError> {
    let card = state.verse.lock().await;
    let capability = ShareCapability::resolve(probe);
    let text = card.share_text();
    let outcome = card.share(capability, &mut PageDelegate);
    Ok(Json(ShareResponse { text, outcome }))
}

pub async fn get_names(State(state): State<AppState>) -> Result<Json<NamesResponse>, AppError> {
    let filter = state.names.lock().await;
    Ok(Json(names_response(&filter)))
}

pub async fn select_names_category(
    State(state): State<AppState>,
    Json(payload): Json<SelectCategoryRequest>,
) -> Result<Json<NamesResponse>, AppError> {
    let mut filter = state.names.lock().await;
    filter.select_category(payload.category.trim());
    Ok(Json(names_response(&filter)))
}

// The page performs the actual share or copy; the server only settles the
// path, so the delegate's operations succeed without doing anything.
struct PageDelegate;

impl SharePlatform for PageDelegate {
    fn native_share(&mut self, _text: &str) -> Result<(), ShareError> {
        Ok(())
    }

    fn write_clipboard(&mut self, _text: &str) -> Result<(), ShareError> {
        Ok(())
    }
}

fn tasbih_response(tasbih: &TasbihCounter, tone: Option<ToneSpec>) -> TasbihResponse {
    TasbihResponse {
        tally: tasbih.tally(),
        cycle_len: CYCLE_LEN,
        upper_bound: UPPER_BOUND,
        formula_index: tasbih.formula_index(),
        formulas: tasbih.formulas().to_vec(),
        markers: tasbih.markers(),
        tone,
    }
}

fn verse_response(card: &VerseOfDay) -> VerseResponse {
    let verse = card.current();
    VerseResponse {
        index: card.current_index(),
        arabic: verse.arabic,
        translation: verse.translation,
        reference: verse.reference,
        topic: verse.topic,
        reflection: verse.reflection,
    }
}

fn names_response(filter: &NameFilter) -> NamesResponse {
    NamesResponse {
        selected: filter.selected().to_string(),
        categories: filter.categories(),
        entries: filter
            .entries()
            .iter()
            .map(|entry| NameView {
                arabic: entry.arabic,
                latin: entry.latin,
                meaning: entry.meaning,
                category: entry.category,
                visible: filter.is_visible(entry),
            })
            .collect(),
    }
}
