
use std::sync::Arc;

use scribe_core::corrections::CorrectionTable;
use scribe_core::jyutping::JyutpingDict;

use super::*;

fn make_session() -> Session {
    let corrections = CorrectionTable::from_toml_str(
        r#"
[corrections]
"你好" = "lei5 hou2"
"#,
    )
    .unwrap();
    Session::new(Arc::new(corrections), Arc::new(JyutpingDict::embedded()))
}
