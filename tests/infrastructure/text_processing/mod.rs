mod composite_file_loader_test;
mod extractor_factory_test;
mod page_aggregator_test;
