use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{Res, spotify, types::PkceToken};

pub async fn auth() -> Res<()> {
    let shared_state: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
    spotify::auth::auth(shared_state).await
}
