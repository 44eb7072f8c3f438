use std::sync::{mpsc, Arc};

use threadpool::ThreadPool;

use crate::error::Error;
use crate::huffman::{encode, Encoded, Symbol};
use crate::Result;

/// Encode independent inputs on the pool, each with its own code.
///
/// Results come back in the order of `inputs`. Jobs share the inputs with the caller,
/// nothing is copied. A job that dies without reporting is turned into
/// [`Error::WorkerFailed`].
pub fn encode_all<S>(threadpool: &ThreadPool, inputs: &[Arc<[S]>]) -> Vec<Result<Encoded<S>>>
where
    S: Symbol + Send + Sync + 'static,
{
    let input_count = inputs.len();
    let (sender, receiver) = mpsc::channel();
    for (index, input) in inputs.iter().enumerate() {
        let input = Arc::clone(input);
        let sender = sender.clone();
        threadpool.execute(move || {
            let result = encode(&input);
            if sender.send((index, result)).is_err() {
                log::warn!("Result of input {} was not collected", index);
            }
        });
    }
    drop(sender);

    let mut results: Vec<Option<Result<Encoded<S>>>> = (0..input_count).map(|_| None).collect();
    for (index, result) in receiver {
        results[index] = Some(result);
    }
    results
        .into_iter()
        .enumerate()
        .map(|(index, result)| result.unwrap_or_else(|| Err(Error::WorkerFailed(index))))
        .collect()
}
