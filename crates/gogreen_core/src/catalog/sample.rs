//! Built-in placeholder content.
//!
//! Provides the same groups and items at design time and run time so views
//! have something to bind to before live data exists.

use crate::catalog::{Catalog, CatalogResult, CatalogSeeder};
use crate::model::entry::NewEntry;
use crate::model::group::NewGroup;

/// Seeds the two "Go Green" groups with six items each.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleSeeder;

impl CatalogSeeder for SampleSeeder {
    fn seed(&self, catalog: &mut Catalog) -> CatalogResult<()> {
        for sample in SAMPLE_GROUPS {
            let group = catalog.add_group(NewGroup {
                unique_id: sample.unique_id.to_string(),
                title: sample.title.to_string(),
                subtitle: sample.subtitle.to_string(),
                image_path: Some(sample.image_path.to_string()),
                description: sample.description.to_string(),
            })?;
            let mut group = group.borrow_mut();
            for item in sample.items {
                group.push_new(NewEntry {
                    unique_id: item.unique_id.to_string(),
                    title: item.title.to_string(),
                    subtitle: item.subtitle.to_string(),
                    image_path: Some(item.image_path.to_string()),
                    description: item.description.to_string(),
                    content: item.content.to_string(),
                    col_span: item.col_span,
                    row_span: item.row_span,
                })?;
            }
        }
        Ok(())
    }
}

struct SampleGroup {
    unique_id: &'static str,
    title: &'static str,
    subtitle: &'static str,
    image_path: &'static str,
    description: &'static str,
    items: &'static [SampleItem],
}

struct SampleItem {
    unique_id: &'static str,
    title: &'static str,
    subtitle: &'static str,
    image_path: &'static str,
    description: &'static str,
    content: &'static str,
    col_span: u32,
    row_span: u32,
}

const SAMPLE_GROUPS: &[SampleGroup] = &[
    SampleGroup {
        unique_id: "Group-1",
        title: "Ways to Go Green",
        subtitle: "Ways to Go Green",
        image_path: "Assets/10.jpg",
        description: "How can we live lightly on the Earth and save money at the same time? Staff members at the Worldwatch Institute, a global environmental organization, share ideas on how to GO GREEN and SAVE GREEN at home and at work. To learn more about Worldwatch's efforts to create am environmentally sustainable society that meets human needs",
        items: &[
            SampleItem {
                unique_id: "Big-Group-1-Item1",
                title: "Save energy to save money",
                subtitle: "Save energy to save money",
                image_path: "Assets/11.jpg",
                description: "How can we live lightly on the Earth and save money at the same time? Staff members at the Worldwatch Institute, a global environmental organization, share ideas on how to GO GREEN and SAVE GREEN at home and at work. To learn more about Worldwatch's efforts to create am environmentally sustainable society that meets human needs",
                content: "Set your thermostat a few degrees lower in the winter and a few degrees higher in the summer to save on heating and cooling costs.\nInstall compact fluorescent light bulbs (CFLs) when your older incandescent bulbs burn out.\nUnplug appliances when you're not using them. Or, use a smart power strip that senses when appliances are off and cuts phantom or vampire energy use.\nWash clothes in cold water whenever possible. As much as 85 percent of the energy used to machine-wash clothes goes to heating the water.\nUse a drying rack or clothesline to save the energy otherwise used during machine drying.",
                col_span: 79,
                row_span: 49,
            },
            SampleItem {
                unique_id: "Small-Group-1-Item2",
                title: "Save water to save money",
                subtitle: "Save water to save money",
                image_path: "Assets/12.jpg",
                description: "Climate change is in the news. It seems like everyone's going green We're glad you want to take action, too. Luckily, many of the steps we can take to stop climate change can make our lives better. Our grandchildren-and their children-will thank us for living more sustainably. Let's start now.",
                content: "Take shorter showers to reduce water use. This will lower your water and heating bills too.\nInstall a low-flow showerhead. They don't cost much, and the water and energy savings can quickly pay back your investment.\nMake sure you have a faucet aerator on each faucet. These inexpensive appliances conserve heat and water, while keeping water pressure high.\nPlant drought-tolerant native plants in your garden. Many plants need minimal watering. Find out which occur naturally in your area.",
                col_span: 53,
                row_span: 49,
            },
            SampleItem {
                unique_id: "Big-Group-1-Item3",
                title: "Less Gas",
                subtitle: "Less Gas",
                image_path: "Assets/13.jpg",
                description: "How can we live lightly on the Earth and save money at the same time? Staff members at the Worldwatch Institute, a global environmental organization, share ideas on how to GO GREEN and SAVE GREEN at home and at work. To learn more about Worldwatch's efforts to create am environmentally sustainable society that meets human needs",
                content: "Walk or bike to work. This saves on gas and parking costs while improving your cardiovascular health and reducing your risk of obesity.\nConsider telecommuting if you live far from your work. Or move closer. Even if this means paying more rent, it could save you money in the long term.\nLobby your local government to increase spending on sidewalks and bike lanes. With little cost, these improvements can pay huge dividends in bettering your health and reducing traffic.",
                col_span: 79,
                row_span: 49,
            },
            SampleItem {
                unique_id: "Big-Group-1-Item4",
                title: "Eat Smart",
                subtitle: "Eat Smart.",
                image_path: "Assets/14.jpg",
                description: "How can we live lightly on the Earth and save money at the same time? Staff members at the Worldwatch Institute, a global environmental organization, share ideas on how to GO GREEN and SAVE GREEN at home and at work. To learn more about Worldwatch's efforts to create am environmentally sustainable society that meets human needs",
                content: "If you eat meat, add one meatless meal a week. Meat costs a lot at the store-and it's even more expensive when you consider the related environmental and health costs.Buy locally raised, humane, and organic meat, eggs, and dairy whenever you can. Purchasing from local farmers keeps money in the local economy.Watch videos about why local food and sustainable seafood are so great.Whatever your diet, eat low on the food chain. This is especially true for seafood.",
                col_span: 79,
                row_span: 49,
            },
            SampleItem {
                unique_id: "Big-Group-1-Item5",
                title: "Skip the bottled water",
                subtitle: "Skip the bottled water",
                image_path: "Assets/15.jpg",
                description: "Go Green is in the news. It seems like everyone's going green. We're glad you want to take action, too. Luckily, many of the steps we can take to stop climate change can make our lives better. Our grandchildren-and their children-will thank us for living more sustainably. Let's start now.",
                content: "Use a water filter to purify tap water instead of buying bottled water. Not only is bottled water expensive, but it generates large amounts of container waste.\nBring a reusable water bottle, preferably aluminum rather than plastic, with you when traveling or at work.\nCheck out this short article for the latest on bottled water trends.",
                col_span: 79,
                row_span: 49,
            },
            SampleItem {
                unique_id: "Small-Group-1-Item6",
                title: "Think before you buy",
                subtitle: "Think before you buy",
                image_path: "Assets/16.jpg",
                description: "How can we live lightly on the Earth and save money at the same time? Staff members at the Worldwatch Institute, a global environmental organization, share ideas on how to GO GREEN and SAVE GREEN at home and at work. To learn more about Worldwatch's efforts to create am environmentally sustainable society that meets human needs",
                content: "Go online to find new or gently used secondhand products. Whether you've just moved or are looking to redecorate, consider a service like craigslist or FreeSharing to track down furniture, appliances, and other items cheaply or for free.\nCheck out garage sales, thrift stores, and consignment shops for clothing and other everyday items.When making purchases, make sure you know what's Good Stuff and what isn't.Watch a video about what happens when you buy things. Your purchases have a real impact, for better or worse.",
                col_span: 53,
                row_span: 49,
            },
        ],
    },
    SampleGroup {
        unique_id: "Group-2",
        title: "Benefits of Going Green",
        subtitle: "Benefits of Going Green",
        image_path: "Assets/20.jpg",
        description: "Basically, green living refers to a way of life that contributes towards maintaining the natural ecological balance in the environment, and preserving the planet and its natural systems and resources.",
        items: &[
            SampleItem {
                unique_id: "Big-Group-2-Item1",
                title: "Lower costs",
                subtitle: "Lower costs",
                image_path: "Assets/21.jpg",
                description: "One of the most evident benefits of going green is that it can help us cut cost, whether as an individual, a household, a community or a nation.",
                content: "One of the most evident benefits of going green is that it can help us cut cost, whether as an individual, a household, a community or a nation.\n\nWhen you and I conserve energy and resources, by not wasting water and electricity and adopting green traveling tips, we help to reduce the amount of money that needs to be spent on energy and resources.\n\nBy sending our unwanted items for recycling, and supporting the recycling industry by purchasing recycled products, in the long run as a community, we are reducing the cost of production, because it uses more energy (and hence is more costly) to manufacture products using virgin raw materials.\n\nAs we reduce our waste, by reducing consumption or reusing, or diverting waste from the landfills and incinerators through recycling, we would be able to save on waste disposal. Valuable land originally intended for landfills and incinerator plants can now be freed up for other uses.\n\nAnd reducing the pollution that we create is definitely cheaper than trying to clear up the pollution after we have created the mess!\n\nThese are just some of the economic benefits of going green. (Also read about the economic benefits of recycling). You can only stand to benefit by living a green life. So why not start now?",
                col_span: 79,
                row_span: 49,
            },
            SampleItem {
                unique_id: "Small-Group-2-Item2",
                title: "Healthier lives",
                subtitle: "Healthier lives",
                image_path: "Assets/22.jpg",
                description: "Are you aware that one of the benefits of going green is a healthier environment for you and me?",
                content: "Are you aware that one of the benefits of going green is a healthier environment for you and me?\n\nAs more and more people seek to live a green life by reducing the pollution and carbon footprints they leave behind, we can look forward to better quality air, a cleaner environment and better health.\n\nThe quality of our air definitely has an impact on our health. According to the World Health Organization, air pollution is estimated to cause about 2 million premature deaths worldwide every year. Common air pollutants like lead have been found to be associated with behavioral problems, learning deficits and lowered IQ in young children.In addition, the health of our environment also has an impact on the quality of our food and ultimately our health. It would be hard to imagine how we could remain healthy if we are consuming polluted drinking water and food contaminated with chemicals (eg. fish with heavy metal contamination, vegetables exposed to acid rain, etc) for long periods.\n\nBy keeping our air and environment, cleaner, we are actually building a healthier environment for ourselves, our loved ones and our future generations.\n\nWhen the human race strives towards living a green life on earth, we would have less fear of the impact of extreme temperatures and climate changes brought about by global warming.",
                col_span: 53,
                row_span: 49,
            },
            SampleItem {
                unique_id: "Big-Group-2-Item3",
                title: "More sustainable world",
                subtitle: "More sustainable world",
                image_path: "Assets/23.jpg",
                description: "One of the most important benefits of going green is a more sustainable world.",
                content: "One of the most important benefits of going green is a more sustainable world.\n\nAt the rate that we are consuming the world’s resources, polluting the earth and fueling global warming, and destroying the earth’s ecosystem, in no time, we would be left with nothing (no clean air, water, land and food) but an un-livable world beyond repair.\n\nOn the day that we reach such a stage, there would be no material comfort or economic growth to talk about at all. This is because our very lives would be threatened – there would be no clean air, no clean drinking water, no food, and probably even no safety from the harsh climate that would have changed beyond recognition.\n\nWhat a horrible situation to be in!\n\nWe need to do something, starting today, if we do not wish to end up in that horrible state.\n\nWhile it is important for each of our nations to seek and maintain growth and development, we need to do so in a sustainable way – via sustainable living. We need to start adopting green practices in our daily lives, as well as encourage others around us to do the same.\n\nIt is important for each and every one of us to do our parts, but an individual’s effort alone is not enough. We need to work together as a human community.\n\nWe must start now!",
                col_span: 79,
                row_span: 49,
            },
            SampleItem {
                unique_id: "Big-Group-2-Item4",
                title: "Better quality of life",
                subtitle: "Better quality of life",
                image_path: "Assets/24.jpg",
                description: "Living a green life can actually offer us a better quality of life on earth.To truly experience the benefits of going green, you need to look beyond material luxuries.",
                content: "Living a green life can actually offer us a better quality of life on earth.To truly experience the benefits of going green, you need to look beyond material luxuries.\n\nThis is because two of the very key principles of going green are actually conservation and the reduction of consumption and waste – which means to use and consume the earth’s resources with care, and not over-indulge in excessive material luxuries.\n\nConsidering that material luxuries can only bring you momentary happiness, and that at the end of the day, other non-material things (eg. relationships, self-actualisation, etc) actually matter more, looking beyond material luxuries may not be so hard.\n\nNevertheless, that is not to say that going green means to give up the comfortable life you have now.\n\nIt just means having more consideration for the things you use and the environment you live in, bearing in mind the impact of your actions on the earth, and taking a little effort and creativity to reduce the negative impact you leave behind on this earth.\n\nWith a greener planet, you and I can look forward to a cleaner and more beautiful environment, relatively free of pollution. With better quality of air, surroundings and food, we are more likely to be healthier (to be around to fulfill our aspirations and enjoy our relationship with our loved ones).\n\nAt the same time, we will be more in touch with the earth we live on. We can get to experience and better appreciate the wonders of the diversity of animal and plant life on this planet.\n\nAll these benefits can actually help you live a fuller life, more than what a life filled only with materials can do.",
                col_span: 79,
                row_span: 49,
            },
            SampleItem {
                unique_id: "Big-Group-2-Item5",
                title: "Development in new areas",
                subtitle: "Development in new areas",
                image_path: "Assets/25.jpg",
                description: "As more and more people start living a green life, there will be greater drive for developments in the area of green energies, recycling and other green technologies, as well as a market for eco-friendly products and services.",
                content: "As more and more people start living a green life, there will be greater drive for developments in the area of green energies, recycling and other green technologies, as well as a market for eco-friendly products and services.In turn, these developments would make it easier for people to adopt green living practices. A positive reinforcement loop would be created for a green way of life.",
                col_span: 79,
                row_span: 49,
            },
            SampleItem {
                unique_id: "Small-Group-2-Item6",
                title: "Go Green Asset",
                subtitle: "Go Green Asset",
                image_path: "Assets/26.jpg",
                description: "There are many benefits of going green. But before examining the benefits, it is important for you to understand what going green means.",
                content: "There are many benefits of going green. But before examining the benefits, it is important for you to understand what going green means.Basically, green living refers to a way of life that contributes towards maintaining the natural ecological balance in the environment, and preserving the planet and its natural systems and resources.\n\nThere are many things you can do to live a green life, amongst which you can help by:\n\nreducing pollution ,\nconserving natural resources,\nrecycling non-biodegradable products,\ncontributing to conservation of forests and wildlife,\ncultivating more plants and trees in vacant lands, and\nhelping to maintain the ecological balance on the earth, so that all living beings can survive and thrive in their natural habitat.",
                col_span: 53,
                row_span: 49,
            },
        ],
    },
];
