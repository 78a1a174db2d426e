mod clipper_tests;
mod clipper_wrapper_tests;
mod join_tests;
mod out_rec_tests;
