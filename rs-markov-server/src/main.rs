use std::path::PathBuf;

use actix_cors::Cors;
use actix_web::{get, middleware, web, App, HttpResponse, HttpServer, Responder};

use clap::Parser;
use log::info;
use serde::Deserialize;
use rs_markov_core::{DeadEndPolicy, Generator, MarkovError, Prediction, PredictionInput, TransitionModel, WORD_NOT_FOUND};

/// Default number of words when the query does not give one
const DEFAULT_COUNT: usize = 5;

#[derive(Parser)]
#[command(name = "rs-markov-server")]
#[command(about = "HTTP front end for the word-level Markov generator", long_about = None)]
struct Args {
	/// Corpus text file used to train the model
	#[arg(short, long)]
	corpus: PathBuf,

	/// Address to bind
	#[arg(long, default_value = "127.0.0.1")]
	host: String,

	/// Port to bind
	#[arg(short, long, default_value_t = 5000)]
	port: u16,
}

/// Struct representing query parameters for the `/v1/predict` endpoint
#[derive(Deserialize)]
struct PredictParams {
	word: Option<String>, // -> random key of the model if missing
	count: Option<usize>,
	strict: Option<bool>
}

impl PredictParams {
	/// Builds the generation request, picking a random seed word if none was given.
	///
	/// Returns `Ok(None)` if no word was given and the model is empty.
	fn prediction_input(&self, model: &TransitionModel) -> Result<Option<PredictionInput>, MarkovError> {
		let word = match &self.word {
			Some(w) => w.as_str(),
			None => match model.random_word(&mut rand::rng()) {
				Some(w) => w,
				None => return Ok(None),
			},
		};

		let mut input = PredictionInput::new(word, self.count.unwrap_or(DEFAULT_COUNT))?;
		if self.strict.unwrap_or(false) {
			input.dead_end = DeadEndPolicy::Fail;
		}
		Ok(Some(input))
	}
}

/// HTTP GET endpoint `/v1/predict`
///
/// Generates a sentence from the shared model based on query parameters.
/// Returns the sentence as the response body, or the fixed not-found
/// message with a 404 status when the seed word is unknown.
#[get("/v1/predict")]
async fn get_predict(model: web::Data<TransitionModel>, query: web::Query<PredictParams>) -> impl Responder {
	let input = match query.prediction_input(&model) {
		Ok(Some(input)) => input,
		Ok(None) => return HttpResponse::NotFound().body(WORD_NOT_FOUND),
		Err(e) => return HttpResponse::BadRequest().body(e.to_string()),
	};

	match Generator::new(&model).predict(&input, &mut rand::rng()) {
		Ok(Prediction::Sentence(sentence)) => HttpResponse::Ok().body(sentence),
		Ok(Prediction::WordNotFound) => HttpResponse::NotFound().body(WORD_NOT_FOUND),
		Err(e @ MarkovError::DeadEnd { .. }) => HttpResponse::UnprocessableEntity().body(e.to_string()),
		Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
	}
}

/// HTTP GET endpoint `/v1/stats`
///
/// Returns the number of words and transitions of the loaded model as JSON.
#[get("/v1/stats")]
async fn get_stats(model: web::Data<TransitionModel>) -> impl Responder {
	HttpResponse::Ok().json(model.stats())
}

/// Main entry point for the server.
///
/// Trains the model once and shares it read-only between workers.
///
/// # Notes
/// - The model is never mutated after startup, so no lock is needed.
/// - The server binds to 127.0.0.1:5000 unless told otherwise.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
	let args = Args::parse();

	let model = TransitionModel::from_file(&args.corpus)
		.map_err(|e| std::io::Error::other(e.to_string()))?;
	let shared_model = web::Data::new(model);

	info!("Listening on {}:{}", args.host, args.port);
	HttpServer::new(move || {
		App::new()
			.wrap(middleware::Logger::default())
			.wrap(Cors::permissive())
			.app_data(shared_model.clone())
			.service(get_predict)
			.service(get_stats)
	})
		.bind((args.host.as_str(), args.port))?
		.run()
		.await
}
