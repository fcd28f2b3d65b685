pub mod document_qa;
