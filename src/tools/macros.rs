

// Expansion must not pick up the crate's own `Result<T>` alias from a glob import
#[cfg(test)]
mod prelude_in_scope {
	use crate::prelude::*;
	use futures::executor::block_on;
	use serde_json::json;

	#[tool(description = "Repeat a word")]
	fn repeat(word: String, times: usize) -> String {
		word.repeat(times)
	}

	fn crate_result() -> Result<usize> {
		Ok(RepeatTool.args().len())
	}

	#[test]
	fn tool_compiles_next_to_the_crate_result_alias() {
		assert_eq!(crate_result().unwrap(), 2);
		let got = block_on(RepeatTool.run(json!({ "word": "ab", "times": 3 }))).unwrap();
		assert_eq!(got, "ababab");
	}
}
