//! Tokenizer tests module
//!
//! Organized test modules:
//! - basic: 基础测试（空输入、空白符、单个分隔符）
//! - comma: 逗号自成 token 的测试
//! - ignore: ignore 覆盖测试
//! - drivers: list / set 收集测试
//! - fuzz: proptest / quickcheck 性质测试
