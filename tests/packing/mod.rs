mod pack;
mod pack_request;
