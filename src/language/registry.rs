//! Per-language separator lists, ordered from structurally significant breaks
//! down to generic whitespace and the final per-character catch-all.
//!
//! This registry is data, not logic. Every list ends in `""`, so the recursive
//! splitter always bottoms out at single characters.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::core::exceptions::{ChunkflowError, Result};
use crate::language::Language;

lazy_static! {
    static ref SEPARATOR_REGISTRY: HashMap<Language, Vec<&'static str>> = {
        let mut m = HashMap::new();
        m.insert(
            Language::Cpp,
            vec![
                "\nclass ", "\nvoid ", "\nint ", "\nfloat ", "\ndouble ", "\nif ", "\nfor ",
                "\nwhile ", "\nswitch ", "\ncase ", "\n\n", "\n", " ", "",
            ],
        );
        m.insert(
            Language::Go,
            vec![
                "\nfunc ", "\nvar ", "\nconst ", "\ntype ", "\nif ", "\nfor ", "\nswitch ",
                "\ncase ", "\n\n", "\n", " ", "",
            ],
        );
        m.insert(
            Language::Java,
            vec![
                "\nclass ",
                "\npublic ",
                "\nprotected ",
                "\nprivate ",
                "\nstatic ",
                "\nif ",
                "\nfor ",
                "\nwhile ",
                "\nswitch ",
                "\ncase ",
                "\n\n",
                "\n",
                " ",
                "",
            ],
        );
        m.insert(
            Language::Kotlin,
            vec![
                "\nclass ",
                "\npublic ",
                "\nprotected ",
                "\nprivate ",
                "\ninternal ",
                "\ncompanion ",
                "\nfun ",
                "\nval ",
                "\nvar ",
                "\nif ",
                "\nfor ",
                "\nwhile ",
                "\nwhen ",
                "\ncase ",
                "\nelse ",
                "\n\n",
                "\n",
                " ",
                "",
            ],
        );
        m.insert(
            Language::Js,
            vec![
                "\nfunction ",
                "\nconst ",
                "\nlet ",
                "\nvar ",
                "\nclass ",
                "\nif ",
                "\nfor ",
                "\nwhile ",
                "\nswitch ",
                "\ncase ",
                "\ndefault ",
                "\n\n",
                "\n",
                " ",
                "",
            ],
        );
        m.insert(
            Language::Ts,
            vec![
                "\nenum ",
                "\ninterface ",
                "\nnamespace ",
                "\ntype ",
                "\nclass ",
                "\nfunction ",
                "\nconst ",
                "\nlet ",
                "\nvar ",
                "\nif ",
                "\nfor ",
                "\nwhile ",
                "\nswitch ",
                "\ncase ",
                "\ndefault ",
                "\n\n",
                "\n",
                " ",
                "",
            ],
        );
        m.insert(
            Language::Php,
            vec![
                "\nfunction ",
                "\nclass ",
                "\nif ",
                "\nforeach ",
                "\nwhile ",
                "\ndo ",
                "\nswitch ",
                "\ncase ",
                "\n\n",
                "\n",
                " ",
                "",
            ],
        );
        m.insert(
            Language::Proto,
            vec![
                "\nmessage ",
                "\nservice ",
                "\nenum ",
                "\noption ",
                "\nimport ",
                "\nsyntax ",
                "\n\n",
                "\n",
                " ",
                "",
            ],
        );
        m.insert(
            Language::Python,
            vec!["\nclass ", "\ndef ", "\n\tdef ", "\n\n", "\n", " ", ""],
        );
        m.insert(
            Language::Rst,
            vec![
                "\n=+\n", "\n-+\n", "\n\\*+\n", "\n\n.. *\n\n", "\n\n", "\n", " ", "",
            ],
        );
        m.insert(
            Language::Ruby,
            vec![
                "\ndef ", "\nclass ", "\nif ", "\nunless ", "\nwhile ", "\nfor ", "\ndo ",
                "\nbegin ", "\nrescue ", "\n\n", "\n", " ", "",
            ],
        );
        m.insert(
            Language::Rust,
            vec![
                "\nfn ", "\nconst ", "\nlet ", "\nif ", "\nwhile ", "\nfor ", "\nloop ",
                "\nmatch ", "\n\n", "\n", " ", "",
            ],
        );
        m.insert(
            Language::Scala,
            vec![
                "\nclass ", "\nobject ", "\ndef ", "\nval ", "\nvar ", "\nif ", "\nfor ",
                "\nwhile ", "\nmatch ", "\ncase ", "\n\n", "\n", " ", "",
            ],
        );
        m.insert(
            Language::Swift,
            vec![
                "\nfunc ", "\nclass ", "\nstruct ", "\nenum ", "\nif ", "\nfor ", "\nwhile ",
                "\ndo ", "\nswitch ", "\ncase ", "\n\n", "\n", " ", "",
            ],
        );
        m.insert(
            Language::Markdown,
            vec![
                "\n## ",
                "\n### ",
                "\n#### ",
                "\n##### ",
                "\n###### ",
                "```\n\n",
                "\n\n***\n\n",
                "\n\n---\n\n",
                "\n\n___\n\n",
                "\n\n",
                "\n",
                " ",
                "",
            ],
        );
        m.insert(
            Language::Latex,
            vec![
                "\n\\chapter{",
                "\n\\section{",
                "\n\\subsection{",
                "\n\\subsubsection{",
                "\n\\begin{enumerate}",
                "\n\\begin{itemize}",
                "\n\\begin{description}",
                "\n\\begin{list}",
                "\n\\begin{quote}",
                "\n\\begin{quotation}",
                "\n\\begin{verse}",
                "\n\\begin{verbatim}",
                "\n\\begin{align}",
                "$$",
                "$",
                " ",
                "",
            ],
        );
        m.insert(
            Language::Html,
            vec![
                "<body", "<div", "<p", "<br", "<li", "<h1", "<h2", "<h3", "<h4", "<h5", "<h6",
                "<span", "<table", "<tr", "<td", "<th", "<ul", "<ol", "<header", "<footer",
                "<nav", "<head", "<style", "<script", "<meta", "<title", "",
            ],
        );
        m.insert(
            Language::Sol,
            vec![
                "\npragma ",
                "\nusing ",
                "\ncontract ",
                "\ninterface ",
                "\nlibrary ",
                "\nconstructor ",
                "\ntype ",
                "\nfunction ",
                "\nevent ",
                "\nmodifier ",
                "\nerror ",
                "\nstruct ",
                "\nenum ",
                "\nif ",
                "\nfor ",
                "\nwhile ",
                "\ndo while ",
                "\nassembly ",
                "\n\n",
                "\n",
                " ",
                "",
            ],
        );
        m.insert(
            Language::CSharp,
            vec![
                "\ninterface ",
                "\nenum ",
                "\nimplements ",
                "\ndelegate ",
                "\nevent ",
                "\nclass ",
                "\nabstract ",
                "\npublic ",
                "\nprotected ",
                "\nprivate ",
                "\nstatic ",
                "\nreturn ",
                "\nif ",
                "\ncontinue ",
                "\nfor ",
                "\nforeach ",
                "\nwhile ",
                "\nswitch ",
                "\nbreak ",
                "\ncase ",
                "\nelse ",
                "\ntry ",
                "\nthrow ",
                "\nfinally ",
                "\ncatch ",
                "\n\n",
                "\n",
                " ",
                "",
            ],
        );
        m
    };
}

/// Read-only accessor into the registry.
pub fn get_separators_for_language(language: Language) -> Result<Vec<String>> {
    SEPARATOR_REGISTRY
        .get(&language)
        .map(|separators| separators.iter().map(|s| s.to_string()).collect())
        .ok_or_else(|| ChunkflowError::UnsupportedLanguage(language.tag().to_string()))
}
